//! NyumbaPaeasy Listings API
//!
//! Backend service for the NyumbaPaeasy property platform: verifies
//! Supabase-issued access tokens, enriches callers with their profile
//! record from the platform database, and gates the property-listing
//! endpoint behind a role check.
//!
//! The `profiles`, `verification_documents`, and `properties` tables are
//! owned and migrated by the platform's Supabase project; this service is a
//! read-side consumer of them.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod postgrest;
pub mod store;

/// A convenience module for common imports
pub mod prelude {
    pub use crate::api::AppState;
    pub use crate::auth::{AuthContext, AuthenticatedUser, Authenticator};
    pub use crate::config::Config;
    pub use crate::error::Error;
}
