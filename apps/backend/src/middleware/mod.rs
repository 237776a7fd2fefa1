//! HTTP middleware stack: CORS, request ids and request logging.
//!
//! Authorization is not middleware here; protected handlers invoke the
//! guard in [`crate::auth::authenticator`] explicitly with their required
//! permission.

pub mod cors;
pub mod request_id;
pub mod structured_logger;
