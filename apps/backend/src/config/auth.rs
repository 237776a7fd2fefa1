//! Identity provider configuration.

use std::env;

/// The issuer we trust and the audience our tokens must carry.
///
/// Read once at startup; the accepted signing algorithms are fixed in the
/// verifier and are not configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Issuer domain, without scheme or trailing slash
    pub domain: String,
    pub audience: String,
}

const DEFAULT_DOMAIN: &str = "dev-8ezs0tce.eu.auth0.com";
const DEFAULT_AUDIENCE: &str = "coffee_shop";

impl AuthConfig {
    pub fn new(domain: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            audience: audience.into(),
        }
    }

    /// Environment variables override the built-in tenant.
    pub fn from_env() -> Self {
        Self {
            domain: env::var("AUTH_DOMAIN").unwrap_or_else(|_| DEFAULT_DOMAIN.to_string()),
            audience: env::var("AUTH_AUDIENCE").unwrap_or_else(|_| DEFAULT_AUDIENCE.to_string()),
        }
    }

    /// Issuer as it appears in the `iss` claim.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain)
    }

    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_urls() {
        let config = AuthConfig::new("dev-8ezs0tce.eu.auth0.com", "coffee_shop");
        assert_eq!(config.issuer(), "https://dev-8ezs0tce.eu.auth0.com/");
        assert_eq!(
            config.jwks_url(),
            "https://dev-8ezs0tce.eu.auth0.com/.well-known/jwks.json"
        );
    }
}
