//! The authorization guard composed from extraction, verification and
//! permission enforcement.

use std::sync::Arc;

use actix_web::http::header::HeaderValue;

use super::claims::Claims;
use super::error::AuthError;
use super::jwks::{HttpKeyFetcher, JwksCache, KeyFetcher};
use super::permissions::check_permission;
use super::token::extract_bearer_token;
use super::verifier;
use crate::config::auth::AuthConfig;

/// Process-scoped authorization service: holds the issuer configuration and
/// the key set cache. Constructed once at startup and shared through
/// application state; route handlers call [`Authenticator::authorize`]
/// before running a protected operation.
#[derive(Clone)]
pub struct Authenticator {
    config: AuthConfig,
    jwks: JwksCache,
}

impl Authenticator {
    /// Build an authenticator fetching keys from the configured issuer.
    pub fn from_config(config: AuthConfig) -> Result<Self, AuthError> {
        let fetcher = HttpKeyFetcher::new(config.jwks_url())?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// Build an authenticator with a custom key source.
    pub fn with_fetcher(config: AuthConfig, fetcher: Arc<dyn KeyFetcher>) -> Self {
        Self {
            config,
            jwks: JwksCache::new(fetcher),
        }
    }

    /// Guard a protected operation: extract the bearer token, verify it and
    /// enforce `required_permission`. Fails fast on the first error and
    /// never downgrades it.
    pub async fn authorize(
        &self,
        header: Option<&HeaderValue>,
        required_permission: &str,
    ) -> Result<Claims, AuthError> {
        let token = extract_bearer_token(header)?;
        let claims = self.verify(&token).await?;
        check_permission(required_permission, &claims)?;

        tracing::debug!(permission = required_permission, "request authorized");
        Ok(claims)
    }

    /// Verify a token's signature, expiry, audience and issuer, resolving
    /// the signing key through the key set cache.
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let kid = verifier::decode_kid(token)?;
        let key = self
            .jwks
            .resolve_key(&kid)
            .await?
            .ok_or_else(AuthError::key_not_found)?;

        verifier::verify_with_key(token, &key, &self.config)
    }
}
