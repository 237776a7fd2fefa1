//! Decoded token claims.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `aud` claim may be a single audience or a list of them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Audience {
    One(String),
    Many(Vec<String>),
}

impl Audience {
    pub fn contains(&self, audience: &str) -> bool {
        match self {
            Self::One(aud) => aud == audience,
            Self::Many(auds) => auds.iter().any(|aud| aud == audience),
        }
    }
}

/// Claims decoded from a verified access token.
///
/// A value of this type is only ever produced by a successful full
/// verification (signature, issuer, audience and expiry); see
/// [`crate::auth::authenticator::Authenticator::verify`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Issuer URL
    pub iss: String,
    pub aud: Audience,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    /// Granted permission scopes. `None` means the claim was absent from
    /// the token, which is distinct from an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    /// Any claims we do not model explicitly (`sub`, `iat`, `azp`, ...)
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_permissions() {
        let claims: Claims = serde_json::from_value(serde_json::json!({
            "iss": "https://dev-8ezs0tce.eu.auth0.com/",
            "aud": "coffee_shop",
            "exp": 1754400000i64,
            "sub": "auth0|abc123",
            "permissions": ["get:drinks-detail", "post:drinks"],
        }))
        .unwrap();

        assert!(claims.aud.contains("coffee_shop"));
        assert_eq!(
            claims.permissions.as_deref(),
            Some(&["get:drinks-detail".to_string(), "post:drinks".to_string()][..])
        );
        assert_eq!(
            claims.extra.get("sub").and_then(|v| v.as_str()),
            Some("auth0|abc123")
        );
    }

    #[test]
    fn test_absent_permissions_stay_absent() {
        let claims: Claims = serde_json::from_value(serde_json::json!({
            "iss": "https://dev-8ezs0tce.eu.auth0.com/",
            "aud": "coffee_shop",
            "exp": 1754400000i64,
        }))
        .unwrap();

        assert!(claims.permissions.is_none());
    }

    #[test]
    fn test_audience_list() {
        let claims: Claims = serde_json::from_value(serde_json::json!({
            "iss": "https://dev-8ezs0tce.eu.auth0.com/",
            "aud": ["coffee_shop", "https://dev-8ezs0tce.eu.auth0.com/userinfo"],
            "exp": 1754400000i64,
        }))
        .unwrap();

        assert!(claims.aud.contains("coffee_shop"));
        assert!(!claims.aud.contains("tea_shop"));
    }
}
