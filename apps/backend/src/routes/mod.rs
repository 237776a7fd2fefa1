use actix_web::{web, HttpResponse};

use crate::error::AppError;

pub mod drinks;
pub mod health;

/// Configure application routes. Shared between `main.rs` and tests so that
/// endpoint behavior can be exercised through the same wiring.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health));
    cfg.configure(drinks::configure_routes);
    cfg.default_service(web::route().to(not_found));
}

/// Fallback for unknown paths, rendered in the standard error shape.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found("resource not found"))
}
