use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::auth::error::AuthError;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// JSON body rendered for every error response:
/// `{"success": false, "error": <status>, "message": <description>}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: message.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("Unprocessable: {detail}")]
    Unprocessable { detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { detail: String },
    #[error("Not found: {detail}")]
    NotFound { detail: String },
    #[error("Conflict: {detail}")]
    Conflict { detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Database unavailable")]
    DbUnavailable,
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::Unprocessable {
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest {
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::Conflict {
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable() -> Self {
        Self::DbUnavailable
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Auth(err) => err.status,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Db { .. }
            | AppError::DbUnavailable
            | AppError::Config { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Server-side failure detail stays in the logs.
    fn message(&self) -> String {
        match self {
            AppError::Auth(err) => err.description.clone(),
            AppError::Unprocessable { detail }
            | AppError::BadRequest { detail }
            | AppError::NotFound { detail }
            | AppError::Conflict { detail } => detail.clone(),
            AppError::Db { .. } | AppError::Config { .. } | AppError::Internal { .. } => {
                "internal server error".to_string()
            }
            AppError::DbUnavailable => "database unavailable".to_string(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(detail) => AppError::unprocessable(detail),
            DomainError::NotFound(_, detail) => AppError::not_found(detail),
            DomainError::Conflict(_, detail) => AppError::conflict(detail),
            DomainError::Infra(InfraErrorKind::DbUnavailable, _) => AppError::db_unavailable(),
            DomainError::Infra(_, detail) => AppError::internal(detail),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::db(format!("db error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        HttpResponse::build(status).json(ErrorBody::new(status, &self.message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::domain::{ConflictKind, NotFoundKind};

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::unprocessable("x").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(AppError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::conflict("x").status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::db("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(AuthError::not_authorized("post:drinks")).status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_server_errors_do_not_leak_detail() {
        let err = AppError::db("connection pool exhausted at 10.0.0.3");
        assert_eq!(err.message(), "internal server error");
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: AppError =
            DomainError::not_found(NotFoundKind::Drink, "Drink with id 9 not found").into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err: AppError =
            DomainError::conflict(ConflictKind::UniqueTitle, "title already exists").into();
        assert_eq!(err.status(), StatusCode::CONFLICT);

        let err: AppError = DomainError::validation("recipe must not be empty").into();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_auth_error_keeps_description() {
        let err = AppError::from(AuthError::token_expired());
        assert_eq!(err.message(), "Token expired.");
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }
}
