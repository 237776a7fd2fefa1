//! Permission checks against verified claims.

use super::claims::Claims;
use super::error::AuthError;

/// Check that the claims grant `required`.
///
/// An empty `required` string means the route needs authentication only.
/// A token without any `permissions` claim is rejected as malformed claims;
/// a present-but-empty list simply fails the membership check.
pub fn check_permission(required: &str, claims: &Claims) -> Result<(), AuthError> {
    if required.is_empty() {
        return Ok(());
    }

    let permissions = claims
        .permissions
        .as_deref()
        .ok_or_else(AuthError::permissions_missing)?;

    if permissions.iter().any(|granted| granted == required) {
        Ok(())
    } else {
        Err(AuthError::not_authorized(required))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;
    use crate::auth::claims::Audience;
    use crate::auth::error::AuthErrorCode;

    fn claims(permissions: Option<Vec<&str>>) -> Claims {
        Claims {
            iss: "https://dev-8ezs0tce.eu.auth0.com/".to_string(),
            aud: Audience::One("coffee_shop".to_string()),
            exp: 4_102_444_800,
            permissions: permissions
                .map(|perms| perms.into_iter().map(str::to_string).collect()),
            extra: Default::default(),
        }
    }

    #[test]
    fn test_granted_permission() {
        let claims = claims(Some(vec!["get:drinks-detail", "post:drinks"]));
        assert!(check_permission("get:drinks-detail", &claims).is_ok());
    }

    #[test]
    fn test_missing_permission() {
        let claims = claims(Some(vec!["get:drinks-detail"]));
        let err = check_permission("delete:drinks", &claims).unwrap_err();
        assert_eq!(err.code, AuthErrorCode::NotAuthorized);
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_empty_permission_list_is_not_authorized() {
        let claims = claims(Some(vec![]));
        let err = check_permission("get:drinks-detail", &claims).unwrap_err();
        assert_eq!(err.code, AuthErrorCode::NotAuthorized);
    }

    #[test]
    fn test_absent_permissions_claim() {
        let claims = claims(None);
        let err = check_permission("get:drinks-detail", &claims).unwrap_err();
        assert_eq!(err.code, AuthErrorCode::InvalidClaims);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.description, "Permissions not included in JWT.");
    }

    #[test]
    fn test_empty_required_permission_is_a_noop() {
        // Authentication-only routes; also holds when the claim is absent.
        assert!(check_permission("", &claims(None)).is_ok());
    }
}
