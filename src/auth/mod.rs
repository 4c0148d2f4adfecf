//! Authentication against platform-issued access tokens
//!
//! Tokens are verified locally with the shared signing secret; the caller is
//! then enriched with their profile record fetched from the platform
//! database. Profile enrichment is best-effort: if the lookup fails the
//! caller still authenticates, and role-dependent authorization downstream
//! denies access because the role field is absent.

mod permission;
mod principal;
mod token;

use reqwest::Client;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::postgrest::PostgrestTable;

pub use permission::*;
pub use principal::*;
pub use token::*;

/// Verifies bearer tokens and produces the authenticated principal
pub struct Authenticator {
    /// Shared secret the platform signs access tokens with
    jwt_secret: String,

    /// Read access to the `profiles` table
    profiles: PostgrestTable,
}

impl Authenticator {
    /// Create a new Authenticator
    pub fn new(config: &Config, client: Client) -> Self {
        Self {
            jwt_secret: config.supabase_jwt_secret.clone(),
            profiles: PostgrestTable::new(
                &config.supabase_url,
                &config.supabase_service_key,
                "profiles",
                client,
                config.request_timeout,
            ),
        }
    }

    /// Authenticate a request from its authorization header value
    ///
    /// `None` means no credentials were supplied, which is an anonymous
    /// outcome rather than a failure, so routes that permit anonymous access
    /// can still be evaluated downstream.
    pub async fn authenticate(
        &self,
        authorization: Option<&str>,
    ) -> Result<AuthContext, AuthError> {
        let header = match authorization {
            Some(header) => header,
            None => return Ok(AuthContext::Anonymous),
        };

        let token = bearer_token(header)?;
        let claims = verify_token(token, &self.jwt_secret)?;
        let profile = self.fetch_profile(&claims.sub).await;

        Ok(AuthContext::Authenticated(AuthenticatedUser {
            id: claims.sub,
            email: claims.email,
            profile,
        }))
    }

    /// Fetch the caller's profile record, degrading to an empty mapping
    ///
    /// A missing row, non-success status, or network failure must not fail
    /// authentication; the empty mapping simply carries no role.
    async fn fetch_profile(&self, user_id: &str) -> Map<String, Value> {
        let result = self
            .profiles
            .select("*")
            .eq("id", user_id)
            .execute::<Map<String, Value>>()
            .await;

        match result {
            Ok(mut rows) => {
                if rows.is_empty() {
                    Map::new()
                } else {
                    rows.remove(0)
                }
            }
            Err(err) => {
                tracing::warn!(
                    user_id,
                    error = %err,
                    "profile lookup failed, continuing without profile data"
                );
                Map::new()
            }
        }
    }
}
