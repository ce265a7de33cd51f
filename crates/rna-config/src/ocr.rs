//! OCR Space configuration.

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    "https://api.ocr.space/parse/image".to_string()
}

fn default_language() -> String {
    "eng".to_string()
}

/// Engine 2 handles tables and nutrition panels better than engine 1.
const fn default_engine() -> u8 {
    2
}

const fn default_timeout_secs() -> u64 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OcrConfig {
    /// OCR Space API key.
    #[serde(default)]
    pub api_key: String,

    /// Parse endpoint URL. Overridable for tests.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// OCR language code (e.g. `eng`, `fre`).
    #[serde(default = "default_language")]
    pub language: String,

    /// OCR engine number.
    #[serde(default = "default_engine")]
    pub engine: u8,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            language: default_language(),
            engine: default_engine(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OcrConfig {
    /// Check if OCR calls can be made.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = OcrConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.language, "eng");
        assert_eq!(config.engine, 2);
        assert_eq!(config.timeout_secs, 20);
    }
}
