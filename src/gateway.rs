// atelier-suggestions/src/gateway.rs

use crate::types::{CreationRecord, CreatorRecord, GatewayError};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Columns pulled for creation rows, including the denormalized creator
const CREATION_SELECT: &str =
    "id,title,materials,tags,category,created_at,creator:creators(display_name,business_name,location,specialties)";

/// Columns pulled for creator rows
const CREATOR_SELECT: &str =
    "id,display_name,business_name,location,specialties,verified,created_at";

/// Read-only access to the hosted record store
///
/// Both calls may fail or return an empty list; callers treat the two the
/// same way (no suggestions).
#[async_trait]
pub trait DataGateway: Send + Sync {
    async fn fetch_all_creations(&self) -> Result<Vec<CreationRecord>, GatewayError>;
    async fn fetch_all_creators(&self) -> Result<Vec<CreatorRecord>, GatewayError>;
}

/// Gateway over a Supabase-style REST surface
pub struct SupabaseGateway {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseGateway {
    /// Create a gateway for the given project URL and anon/service key
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    async fn fetch_table<T: DeserializeOwned>(
        &self,
        table: &str,
        select: &str,
    ) -> Result<Vec<T>, GatewayError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);

        debug!(url = %url, table = %table, "fetching records");

        let response = self
            .client
            .get(&url)
            .query(&[("select", select)])
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(table = %table, status = %status, "record fetch rejected");
            return Err(GatewayError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let records = response
            .json::<Vec<T>>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        debug!(table = %table, count = records.len(), "fetched records");
        Ok(records)
    }
}

#[async_trait]
impl DataGateway for SupabaseGateway {
    async fn fetch_all_creations(&self) -> Result<Vec<CreationRecord>, GatewayError> {
        self.fetch_table("creations", CREATION_SELECT).await
    }

    async fn fetch_all_creators(&self) -> Result<Vec<CreatorRecord>, GatewayError> {
        self.fetch_table("creators", CREATOR_SELECT).await
    }
}
