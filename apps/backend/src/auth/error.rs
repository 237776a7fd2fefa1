//! Typed authorization failures.
//!
//! Every failure inside the auth pipeline is an [`AuthError`]; raw transport
//! or parse errors never cross the module boundary. Add new codes here;
//! never pass ad-hoc strings as error codes.

use core::fmt;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::error::ErrorBody;

/// Canonical auth error codes as they appear in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorCode {
    /// No Authorization header present
    AuthorizationHeaderMissing,
    /// Malformed scheme, malformed token structure, missing kid,
    /// unresolvable key, unparseable token
    InvalidHeader,
    /// `exp` claim in the past
    TokenExpired,
    /// Audience/issuer mismatch, or permissions claim absent
    InvalidClaims,
    /// Permissions claim present but lacks the required scope
    NotAuthorized,
    /// The issuer's key set could not be fetched or parsed
    KeySetFetchError,
}

impl AuthErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AuthorizationHeaderMissing => "authorization_header_missing",
            Self::InvalidHeader => "invalid_header",
            Self::TokenExpired => "token_expired",
            Self::InvalidClaims => "invalid_claims",
            Self::NotAuthorized => "not_authorized",
            Self::KeySetFetchError => "key_set_fetch_error",
        }
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A failed authorization check: code, human-readable description and the
/// HTTP status the boundary layer must respond with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {description}")]
pub struct AuthError {
    pub code: AuthErrorCode,
    pub description: String,
    pub status: StatusCode,
}

impl AuthError {
    fn new(code: AuthErrorCode, description: impl Into<String>, status: StatusCode) -> Self {
        Self {
            code,
            description: description.into(),
            status,
        }
    }

    pub fn header_missing() -> Self {
        Self::new(
            AuthErrorCode::AuthorizationHeaderMissing,
            "Authorization header is expected.",
            StatusCode::UNAUTHORIZED,
        )
    }

    /// Malformed Authorization header or token header segment (401).
    pub fn invalid_header(description: impl Into<String>) -> Self {
        Self::new(
            AuthErrorCode::InvalidHeader,
            description,
            StatusCode::UNAUTHORIZED,
        )
    }

    /// No key in the issuer's set matches the token's kid (400).
    pub fn key_not_found() -> Self {
        Self::new(
            AuthErrorCode::InvalidHeader,
            "Unable to find the appropriate key.",
            StatusCode::BAD_REQUEST,
        )
    }

    /// Signature/structure failures past the header stage (400).
    pub fn unparseable_token() -> Self {
        Self::new(
            AuthErrorCode::InvalidHeader,
            "Unable to parse authentication token.",
            StatusCode::BAD_REQUEST,
        )
    }

    pub fn token_expired() -> Self {
        Self::new(
            AuthErrorCode::TokenExpired,
            "Token expired.",
            StatusCode::UNAUTHORIZED,
        )
    }

    pub fn incorrect_claims() -> Self {
        Self::new(
            AuthErrorCode::InvalidClaims,
            "Incorrect claims. Please, check the audience and issuer.",
            StatusCode::UNAUTHORIZED,
        )
    }

    pub fn permissions_missing() -> Self {
        Self::new(
            AuthErrorCode::InvalidClaims,
            "Permissions not included in JWT.",
            StatusCode::BAD_REQUEST,
        )
    }

    pub fn not_authorized(permission: &str) -> Self {
        Self::new(
            AuthErrorCode::NotAuthorized,
            format!("The user is not authorized for this action{permission}"),
            StatusCode::FORBIDDEN,
        )
    }

    pub fn key_set_fetch(description: impl Into<String>) -> Self {
        Self::new(
            AuthErrorCode::KeySetFetchError,
            description,
            StatusCode::SERVICE_UNAVAILABLE,
        )
    }
}

impl actix_web::error::ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ErrorBody::new(self.status, &self.description))
    }
}
