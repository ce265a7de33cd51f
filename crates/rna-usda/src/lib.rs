//! # rna-usda
//!
//! USDA FoodData Central HTTP client for Renal Audit.
//!
//! Resolves a product query or FDC id to reference nutrition data:
//! - `/foods/search` lookup with typed response DTOs
//! - relevance ranking of candidate products (token-sorted Jaro-Winkler over
//!   description and brand)
//! - detail mapping from raw `foodNutrients` ids to the canonical nutrient
//!   set, scaled to the product's serving size

pub mod details;
pub mod rank;
pub mod search;

mod error;
mod http;

pub use details::FoodDetails;
pub use error::UsdaError;
pub use rank::RankedFood;
pub use search::{Food, FoodNutrient, SearchResponse};

use rna_config::UsdaConfig;

/// HTTP client for the FoodData Central API.
pub struct UsdaClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    page_size: u32,
}

impl UsdaClient {
    /// Create a client from configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &UsdaConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("renalaudit/0.1")
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
        }
    }
}
