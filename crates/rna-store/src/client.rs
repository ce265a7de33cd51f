//! Airtable push client.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use rna_config::AirtableConfig;

use crate::StoreError;

#[derive(Debug, Deserialize)]
struct CreatedRecord {
    id: String,
}

/// HTTP client for the audit database.
#[derive(Debug)]
pub struct AirtableClient {
    http: reqwest::Client,
    config: AirtableConfig,
}

impl AirtableClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingConfig`] when credentials or identifiers
    /// are absent.
    pub fn new(config: &AirtableConfig) -> Result<Self, StoreError> {
        if !config.is_configured() {
            return Err(StoreError::MissingConfig);
        }
        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent("renalaudit/0.1")
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .expect("reqwest client should build"),
            config: config.clone(),
        })
    }

    /// Create one record from a flat field map. Returns the new record id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport failure or a non-success status.
    /// Nothing is retried here; the caller owns that decision.
    pub async fn push(&self, fields: &BTreeMap<String, Value>) -> Result<String, StoreError> {
        let url = format!(
            "{}/{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.base_id,
            self.config.table_id
        );
        let body = serde_json::json!({ "fields": fields });

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(StoreError::Api {
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        let created: CreatedRecord = resp.json().await?;
        Ok(created.id)
    }
}
