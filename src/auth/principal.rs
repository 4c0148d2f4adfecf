//! The authenticated principal

use serde_json::{Map, Value};

/// Caller identity assembled from a verified token and the `profiles` table
///
/// A plain value object rather than a session or framework user type: the
/// token supplies `id` and `email`, and `profile` carries whatever record the
/// profile lookup returned (possibly empty when the lookup degraded).
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The caller's user id (token `sub` claim)
    pub id: String,

    /// Email address from the token, when present
    pub email: Option<String>,

    /// Profile record fetched from the platform database
    pub profile: Map<String, Value>,
}

impl AuthenticatedUser {
    /// Always true for this type; anonymous callers never get one
    pub fn is_authenticated(&self) -> bool {
        true
    }

    /// Always false for this type
    pub fn is_anonymous(&self) -> bool {
        false
    }

    /// The caller's role, when the profile lookup supplied one
    pub fn role(&self) -> Option<&str> {
        self.profile.get("role").and_then(Value::as_str)
    }
}

/// Outcome of running the authenticator over a request
#[derive(Debug, Clone)]
pub enum AuthContext {
    /// No credentials were supplied
    Anonymous,

    /// Credentials verified; the caller is known
    Authenticated(AuthenticatedUser),
}

impl AuthContext {
    /// The authenticated caller, if there is one
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Anonymous => None,
        }
    }
}
