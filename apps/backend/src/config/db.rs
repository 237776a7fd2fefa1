//! Database configuration.

use std::env;

use crate::error::AppError;

/// Read the database URL from the runtime environment.
pub fn db_url() -> Result<String, AppError> {
    env::var("DATABASE_URL")
        .map_err(|_| AppError::config("DATABASE_URL must be set".to_string()))
}
