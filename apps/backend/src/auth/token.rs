//! Bearer token extraction from the Authorization header.

use actix_web::http::header::HeaderValue;

use super::error::AuthError;

const BEARER_PREFIX: &str = "Bearer ";

/// Pull the bearer token out of an Authorization header value.
///
/// The scheme check is case-sensitive and the remainder must be a single
/// whitespace-delimited fragment, i.e. exactly one `Bearer <token>` pair.
pub fn extract_bearer_token(header: Option<&HeaderValue>) -> Result<String, AuthError> {
    let header = header.ok_or_else(AuthError::header_missing)?;

    let value = header
        .to_str()
        .map_err(|_| AuthError::invalid_header("Authorization header is not valid UTF-8."))?;
    if value.is_empty() {
        return Err(AuthError::header_missing());
    }

    let rest = value.strip_prefix(BEARER_PREFIX).ok_or_else(|| {
        AuthError::invalid_header("Authorization header must start with \"Bearer\".")
    })?;

    let mut fragments = rest.split_whitespace();
    match (fragments.next(), fragments.next()) {
        (Some(token), None) => Ok(token.to_string()),
        _ => Err(AuthError::invalid_header(
            "Authorization header must be a bearer token.",
        )),
    }
}
