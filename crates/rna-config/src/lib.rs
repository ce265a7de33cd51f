//! # rna-config
//!
//! Layered configuration loading for Renal Audit using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RNA_*` prefix, `__` as separator)
//! 2. Project-level `.renalaudit/config.toml`
//! 3. User-level `~/.config/renalaudit/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RNA_USDA__API_KEY` -> `usda.api_key`,
//! `RNA_AUDIT__DISCREPANCY_THRESHOLD_PCT` -> `audit.discrepancy_threshold_pct`,
//! etc. The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use rna_config::RnaConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = RnaConfig::load_with_dotenv().expect("config");
//!
//! if config.usda.is_configured() {
//!     println!("USDA lookups enabled");
//! }
//! println!("discrepancy threshold: {}%", config.audit.discrepancy_threshold_pct);
//! ```

mod airtable;
mod audit;
mod error;
mod llm;
mod ocr;
mod usda;

pub use airtable::AirtableConfig;
pub use audit::AuditConfig;
pub use error::ConfigError;
pub use llm::LlmConfig;
pub use ocr::OcrConfig;
pub use usda::UsdaConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RnaConfig {
    #[serde(default)]
    pub audit: AuditConfig,
    #[serde(default)]
    pub usda: UsdaConfig,
    #[serde(default)]
    pub ocr: OcrConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub airtable: AirtableConfig,
}

impl RnaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`RnaConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`RNA_*` prefix)
    /// 2. `.renalaudit/config.toml` (project-local)
    /// 3. `~/.config/renalaudit/config.toml` (user-global)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` for the current directory's `.env` before building
    /// the figment. This is the typical entry point for the CLI and tests.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".renalaudit/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("RNA_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("renalaudit").join("config.toml"))
    }
}
