//! Fetching and caching the issuer's JSON Web Key Set.
//!
//! The set is fetched lazily on the first verification that needs it and is
//! then valid for the process lifetime. Concurrent first-use is
//! single-flighted: at most one network fetch runs, and a failed fetch
//! leaves the cache unpopulated so a later request retries.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::OnceCell;

use super::error::AuthError;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Minimal RSA public key material from the issuer's JWKS document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Jwk {
    pub kid: String,
    pub kty: String,
    #[serde(rename = "use")]
    pub usage: String,
    /// Modulus, base64url
    pub n: String,
    /// Exponent, base64url
    pub e: String,
}

/// Ordered collection of keys, as published by the issuer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}

impl JwkSet {
    /// Look up a key by kid. If the upstream document carries duplicate
    /// kids the first match wins.
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|key| key.kid == kid)
    }
}

/// Source of the issuer's key set.
#[async_trait]
pub trait KeyFetcher: Send + Sync {
    async fn fetch_keys(&self) -> Result<JwkSet, AuthError>;
}

/// Fetches the JWKS document over HTTPS.
pub struct HttpKeyFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpKeyFetcher {
    pub fn new(url: String) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| AuthError::key_set_fetch(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl KeyFetcher for HttpKeyFetcher {
    async fn fetch_keys(&self) -> Result<JwkSet, AuthError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AuthError::key_set_fetch(format!("failed to fetch key set: {e}")))?;

        if !response.status().is_success() {
            return Err(AuthError::key_set_fetch(format!(
                "key set endpoint returned HTTP {}",
                response.status().as_u16()
            )));
        }

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| AuthError::key_set_fetch(format!("invalid key set document: {e}")))
    }
}

/// Process-lifetime cache over a [`KeyFetcher`].
///
/// Cloning is cheap and all clones share the same cell, so the fetch-once
/// guarantee holds across actix workers.
#[derive(Clone)]
pub struct JwksCache {
    inner: Arc<CacheInner>,
}

struct CacheInner {
    fetcher: Arc<dyn KeyFetcher>,
    keys: OnceCell<JwkSet>,
}

impl JwksCache {
    pub fn new(fetcher: Arc<dyn KeyFetcher>) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                fetcher,
                keys: OnceCell::new(),
            }),
        }
    }

    /// Resolve a kid against the cached key set, fetching it first if this
    /// is the initial use. `Ok(None)` means the set was retrieved but holds
    /// no key with that kid.
    pub async fn resolve_key(&self, kid: &str) -> Result<Option<Jwk>, AuthError> {
        let keys = self
            .inner
            .keys
            .get_or_try_init(|| async {
                tracing::info!("fetching issuer key set");
                self.inner.fetcher.fetch_keys().await
            })
            .await?;

        Ok(keys.find(kid).cloned())
    }
}
