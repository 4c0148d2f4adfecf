//! Property listing endpoint

use axum::{http::StatusCode, Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::extract::RequireLister;

/// Intended request body for property creation
///
/// The handler does not read it yet: creation is still owned by the platform
/// frontend, and this endpoint only proves the caller holds the capability.
/// The shape matches the listing form so the future write path can adopt it
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePropertyRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub location: String,
}

impl CreatePropertyRequest {
    /// Shape checks for the listing form: short text fields capped at 255
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.title.chars().count() > 255 {
            return Err("title must be at most 255 characters".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("location must not be empty".to_string());
        }
        if self.location.chars().count() > 255 {
            return Err("location must be at most 255 characters".to_string());
        }
        Ok(())
    }
}

/// Confirmation payload echoed back to a permitted caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePropertyResponse {
    pub message: String,
    pub user_id: String,
    pub role: String,
}

/// `POST /create/`
///
/// Requires an authenticated caller with a role from the property-listing
/// allow-list; both checks run in the [`RequireLister`] guard before this
/// body executes. Nothing is persisted here yet.
pub async fn create_property(
    RequireLister(user): RequireLister,
) -> (StatusCode, Json<CreatePropertyResponse>) {
    let role = user.role().unwrap_or_default().to_string();

    tracing::info!(user_id = %user.id, role = %role, "property creation access granted");

    (
        StatusCode::CREATED,
        Json(CreatePropertyResponse {
            message: "Access granted. You have the correct account type to add properties."
                .to_string(),
            user_id: user.id,
            role,
        }),
    )
}
