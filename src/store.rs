//! Read-only repositories over the externally-owned platform tables
//!
//! Each store wraps one table behind typed query functions. Writes stay with
//! the platform that owns the schema.

use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;

use crate::config::Config;
use crate::error::Error;
use crate::models::{DocumentStatus, Profile, Property, VerificationDocument};
use crate::postgrest::PostgrestTable;

fn table(config: &Config, client: &Client, name: &str) -> PostgrestTable {
    PostgrestTable::new(
        &config.supabase_url,
        &config.supabase_service_key,
        name,
        client.clone(),
        config.request_timeout,
    )
}

/// Read access to the `profiles` table
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profiles: PostgrestTable,
}

impl ProfileStore {
    /// Create a new ProfileStore
    pub fn new(config: &Config, client: Client) -> Self {
        Self {
            profiles: table(config, &client, "profiles"),
        }
    }

    /// Fetch a profile by its id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, Error> {
        self.profiles
            .select("*")
            .eq("id", id)
            .execute_one::<Profile>()
            .await
    }
}

/// Read access to the `verification_documents` table
#[derive(Debug, Clone)]
pub struct VerificationDocumentStore {
    documents: PostgrestTable,
}

impl VerificationDocumentStore {
    /// Create a new VerificationDocumentStore
    pub fn new(config: &Config, client: Client) -> Self {
        Self {
            documents: table(config, &client, "verification_documents"),
        }
    }

    /// All documents a user has submitted, oldest submission first
    pub async fn for_user(&self, user_id: Uuid) -> Result<Vec<VerificationDocument>, Error> {
        self.documents
            .select("*")
            .eq("user_id", user_id)
            .order("submitted_at", true)
            .execute::<VerificationDocument>()
            .await
    }

    /// A user's documents in a given review state, oldest submission first
    pub async fn for_user_with_status(
        &self,
        user_id: Uuid,
        status: DocumentStatus,
    ) -> Result<Vec<VerificationDocument>, Error> {
        self.documents
            .select("*")
            .eq("user_id", user_id)
            .eq("status", status)
            .order("submitted_at", true)
            .execute::<VerificationDocument>()
            .await
    }

    /// Whether the user has at least one document that passed review
    pub async fn has_verified_document(&self, user_id: Uuid) -> Result<bool, Error> {
        let rows = self
            .documents
            .select("id")
            .eq("user_id", user_id)
            .eq("status", DocumentStatus::Verified)
            .limit(1)
            .execute::<Value>()
            .await?;
        Ok(!rows.is_empty())
    }
}

/// Read access to the `properties` table
#[derive(Debug, Clone)]
pub struct PropertyStore {
    properties: PostgrestTable,
}

impl PropertyStore {
    /// Create a new PropertyStore
    pub fn new(config: &Config, client: Client) -> Self {
        Self {
            properties: table(config, &client, "properties"),
        }
    }

    /// Fetch a listing by its id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, Error> {
        self.properties
            .select("*")
            .eq("id", id)
            .execute_one::<Property>()
            .await
    }

    /// Listings still on the market, newest first
    pub async fn list_available(&self, limit: i32) -> Result<Vec<Property>, Error> {
        self.properties
            .select("*")
            .eq("status", "available")
            .order("created_at", false)
            .limit(limit)
            .execute::<Property>()
            .await
    }

    /// All listings created by one profile
    pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Property>, Error> {
        self.properties
            .select("*")
            .eq("owner_id", owner_id)
            .order("created_at", false)
            .execute::<Property>()
            .await
    }
}
