//! Access-token verification

use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Audience claim every platform-issued access token must carry
pub const EXPECTED_AUDIENCE: &str = "authenticated";

/// Claims extracted from a verified access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the caller's user id
    pub sub: String,

    /// Email address, when the identity provider supplies one
    #[serde(default)]
    pub email: Option<String>,

    /// Expiry timestamp (seconds since the epoch)
    pub exp: u64,
}

/// Authentication failure
///
/// Missing credentials are not a failure; the authenticator reports those as
/// an anonymous outcome instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Expiry timestamp is in the past
    #[error("token has expired")]
    ExpiredToken,

    /// Bad signature, wrong audience, or structurally invalid token
    #[error("invalid token")]
    InvalidToken,

    /// Authorization header present but not `Bearer <token>`
    #[error("malformed authorization header")]
    MalformedHeader,

    /// Any other decode failure, message passed through
    #[error("{0}")]
    Other(String),
}

/// Extract the token from a `Bearer <token>` authorization header value
pub fn bearer_token(header: &str) -> Result<&str, AuthError> {
    match header.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Decode and verify an access token against the shared secret
///
/// The algorithm is fixed to HS256 and the audience must be
/// [`EXPECTED_AUDIENCE`]; `sub` and `exp` are required claims.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[EXPECTED_AUDIENCE]);
    validation.set_required_spec_claims(&["exp", "aud", "sub"]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
        ErrorKind::InvalidToken
        | ErrorKind::InvalidSignature
        | ErrorKind::InvalidAudience
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::ImmatureSignature
        | ErrorKind::MissingRequiredClaim(_)
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => AuthError::InvalidToken,
        _ => AuthError::Other(err.to_string()),
    })
}
