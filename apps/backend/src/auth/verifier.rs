//! Cryptographic token verification.
//!
//! Signature verification happens before any claim value is trusted; the
//! kid-based key lookup lets the issuer rotate keys without code changes.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

use super::claims::Claims;
use super::error::AuthError;
use super::jwks::Jwk;
use crate::config::auth::AuthConfig;

/// The only signing algorithm the issuer uses.
pub(crate) const ACCEPTED_ALGORITHMS: &[Algorithm] = &[Algorithm::RS256];

/// Read the kid from the token's header segment, without verifying the
/// signature yet.
pub(crate) fn decode_kid(token: &str) -> Result<String, AuthError> {
    let header =
        decode_header(token).map_err(|_| AuthError::invalid_header("Authorization malformed."))?;

    header
        .kid
        .ok_or_else(|| AuthError::invalid_header("Authorization malformed."))
}

/// Verify signature, expiry, audience and issuer against the resolved key
/// and return the decoded claims.
pub(crate) fn verify_with_key(
    token: &str,
    key: &Jwk,
    config: &AuthConfig,
) -> Result<Claims, AuthError> {
    let decoding_key =
        DecodingKey::from_rsa_components(&key.n, &key.e).map_err(|e| {
            tracing::warn!(kid = %key.kid, error = %e, "unusable key material in key set");
            AuthError::unparseable_token()
        })?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
    validation.set_audience(&[config.audience.as_str()]);
    validation.set_issuer(&[config.issuer()]);

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::token_expired(),
            ErrorKind::InvalidAudience
            | ErrorKind::InvalidIssuer
            | ErrorKind::MissingRequiredClaim(_) => AuthError::incorrect_claims(),
            _ => AuthError::unparseable_token(),
        })
}
