//! Typed records for the externally-owned platform tables
//!
//! The `profiles`, `verification_documents`, and `properties` tables are
//! created and migrated by the platform's Supabase project. These records are
//! read/write projections of that schema, not its source of truth.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Platform user profile
///
/// `id` is immutable once created; `role` drives authorization decisions
/// elsewhere in the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub name: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub has_pending_verification: bool,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Human-readable label: display name, full name, or the id as fallback
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.full_name.clone())
            .unwrap_or_else(|| self.id.to_string())
    }
}

fn default_role() -> String {
    "user".to_string()
}

/// Kind of proof-of-identity/ownership artifact a user can submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    BusinessLicense,
    PropertyDeed,
    NationalId,
    Other,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BusinessLicense => "business_license",
            Self::PropertyDeed => "property_deed",
            Self::NationalId => "national_id",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review state of a verification document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Verified,
    Rejected,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Submitted proof-of-identity/ownership artifact
///
/// Status transitions are owned by the reviewer (`reviewed_by`), never by the
/// submitting user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationDocument {
    pub id: Uuid,
    pub user_id: Uuid,
    pub document_type: DocumentType,
    pub document_url: String,
    pub document_name: Option<String>,
    pub status: DocumentStatus,
    pub admin_notes: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Property listing
///
/// `owner_id` references the creating profile. Price and area are decimals,
/// never binary floats, so currency and area values survive round-trips
/// without rounding error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub owner_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub location: Option<String>,
    pub district: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<Decimal>,
    pub area: Option<Decimal>,
    pub listing_type: Option<String>,
    #[serde(default = "default_property_status")]
    pub status: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub views: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_currency() -> String {
    "MWK".to_string()
}

fn default_property_status() -> String {
    "available".to_string()
}
