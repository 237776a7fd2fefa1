//! Bearer-token authorization against the identity provider's key set.
//!
//! Pipeline: Authorization header → [`token::extract_bearer_token`] →
//! [`authenticator::Authenticator::verify`] (consulting [`jwks::JwksCache`])
//! → [`permissions::check_permission`].

pub mod authenticator;
pub mod claims;
pub mod error;
pub mod jwks;
pub mod permissions;
pub mod token;
mod verifier;
