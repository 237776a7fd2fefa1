//! Backend test support utilities
//!
//! Shared helpers for unit and integration test binaries; currently just
//! unified logging initialization.

pub mod logging;
