//! USDA FoodData Central configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.nal.usda.gov/fdc/v1".to_string()
}

const fn default_page_size() -> u32 {
    100
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UsdaConfig {
    /// FoodData Central API key (from api.data.gov).
    #[serde(default)]
    pub api_key: String,

    /// API base URL. Overridable for tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Results requested per search.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UsdaConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl UsdaConfig {
    /// Check if USDA lookups can be made.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
