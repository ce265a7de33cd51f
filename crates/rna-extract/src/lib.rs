//! # rna-extract
//!
//! Nutrition-label extraction for Renal Audit.
//!
//! A label photo becomes structured data in two hops, each an external
//! collaborator with its own failure modes:
//! 1. OCR Space turns image bytes into raw text.
//! 2. Gemini turns the messy OCR text into a fixed-key JSON object, parsed
//!    into [`LabelInfo`] with coercion applied at the boundary.
//!
//! A third call, [`ExtractClient::ingredient_triggers`], scans ingredient
//! text for renal/gout risks that the numeric panel cannot show (phosphorus
//! additives, purine sources, potassium salts).
//!
//! Every call returns a typed `Result`; no partially-extracted data ever
//! escapes on failure.

mod error;
mod label;
mod llm;
mod ocr;
mod triggers;

pub use error::ExtractError;
pub use label::LabelInfo;

use rna_config::{LlmConfig, OcrConfig};

/// HTTP client for the OCR and extraction-model collaborators.
pub struct ExtractClient {
    http: reqwest::Client,
    ocr: OcrConfig,
    llm: LlmConfig,
}

impl ExtractClient {
    /// Create a client from configuration. Per-request timeouts come from
    /// the respective config sections.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(ocr: &OcrConfig, llm: &LlmConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("renalaudit/0.1")
                .build()
                .expect("reqwest client should build"),
            ocr: ocr.clone(),
            llm: llm.clone(),
        }
    }

    /// Full pipeline: image bytes → OCR text → structured label info.
    ///
    /// # Errors
    ///
    /// Returns the first failure from either hop; nothing is merged on error.
    pub async fn label_from_image(&self, image: Vec<u8>) -> Result<LabelInfo, ExtractError> {
        let text = self.ocr_text(image).await?;
        tracing::debug!(chars = text.len(), "ocr text extracted");
        self.label_from_text(&text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // requires network and RNA_LLM__API_KEY
    async fn live_label_from_text() {
        let config = rna_config::RnaConfig::load_with_dotenv().expect("config");
        let client = ExtractClient::new(&config.ocr, &config.llm);
        let label = client
            .label_from_text(
                "Nutrition Facts\nServing Size 150g\nCalories 90\nTotal Fat 0g\n\
                 S0dium 65mg\nPotassium 141mg\nProtein 15g\nSugars 4g\n\
                 INGREDIENTS: CULTURED NONFAT MILK, CREAM.",
            )
            .await
            .expect("extraction should succeed");
        println!("\n── label_from_text ── {label:#?}");
        assert!(!label.nutrients.is_empty());
    }

    #[tokio::test]
    #[ignore] // requires network and RNA_LLM__API_KEY
    async fn live_ingredient_triggers() {
        let config = rna_config::RnaConfig::load_with_dotenv().expect("config");
        let client = ExtractClient::new(&config.ocr, &config.llm);
        let warnings = client
            .ingredient_triggers(
                Some("Chicken, water, sodium tripolyphosphate, potassium chloride."),
                None,
            )
            .await
            .expect("analysis should succeed");
        println!("\n── ingredient_triggers ── {warnings:#?}");
        assert!(!warnings.is_empty());
    }
}
