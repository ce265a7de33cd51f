//! Airtable audit-database configuration.

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    "https://api.airtable.com/v0".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AirtableConfig {
    /// Personal access token.
    #[serde(default)]
    pub api_key: String,

    /// Base ID (`app...`).
    #[serde(default)]
    pub base_id: String,

    /// Table ID (`tbl...`) or table name.
    #[serde(default)]
    pub table_id: String,

    /// API base URL. Overridable for tests.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for AirtableConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_id: String::new(),
            table_id: String::new(),
            endpoint: default_endpoint(),
        }
    }
}

impl AirtableConfig {
    /// Check if records can be pushed.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.base_id.is_empty() && !self.table_id.is_empty()
    }
}
