//! Gemini client: messy OCR text → fixed-key JSON → [`LabelInfo`].

use serde::Deserialize;

use crate::{ExtractClient, ExtractError, LabelInfo};

/// Extraction instructions. The key set must stay in lockstep with
/// [`rna_core::Nutrient`] label names and the `LabelInfo` wire fields.
const EXTRACTION_PROMPT: &str = r#"You are a data extraction expert. I will provide messy OCR text from a nutrition label.
Extract the following fields into a valid JSON object.

RULES:
1. Use ONLY these keys: "Product Name", "Brand", "Serving Size", "Serving Unit", "Protein", "Sodium", "Potassium", "Phosphorus", "Sugar", "Calories", "Total Fat", "Saturated Fat", "Trans Fat", "Fiber", "Ingredients".
2. Convert all nutrient values to numbers (floats). Do not include units like 'mg' or 'g' in the values.
3. If a value is missing, use null.
4. For 'Ingredients', extract the full comma-separated list.
5. Clean up OCR typos (e.g., 'S0dium' -> 'Sodium').
6. Get serving size in g or mL if possible.
7. Capitalize the first letter only for Product Name and Brand.

OCR TEXT:
"#;

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl ExtractClient {
    /// Convert OCR text into structured label info.
    ///
    /// Empty OCR text short-circuits to an empty `LabelInfo` — there is
    /// nothing to extract, which is not a failure.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] if the model call fails or its response
    /// carries no JSON object.
    pub async fn label_from_text(&self, ocr_text: &str) -> Result<LabelInfo, ExtractError> {
        if ocr_text.trim().is_empty() {
            return Ok(LabelInfo::default());
        }

        let prompt = format!("{EXTRACTION_PROMPT}{ocr_text}\n\nRETURN ONLY THE JSON OBJECT.");
        let text = self.generate(&prompt).await?;
        let json = extract_json_object(&text).ok_or_else(|| {
            ExtractError::Extraction("model response contained no JSON object".to_string())
        })?;
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| ExtractError::Extraction(format!("model returned invalid JSON: {e}")))?;
        Ok(LabelInfo::from_json(&value))
    }

    /// One `generateContent` round-trip, returning the first candidate's
    /// concatenated text.
    pub(crate) async fn generate(&self, prompt: &str) -> Result<String, ExtractError> {
        if self.llm.api_key.is_empty() {
            return Err(ExtractError::MissingApiKey {
                service: "extraction model",
            });
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.llm.endpoint.trim_end_matches('/'),
            self.llm.model,
            self.llm.api_key
        );
        let body = serde_json::json!({
            "contents": [{"parts": [{"text": prompt}]}]
        });

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .timeout(std::time::Duration::from_secs(self.llm.timeout_secs))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ExtractError::Api {
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        let data: GenerateResponse = resp.json().await?;
        let text: String = data
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default();
        if text.is_empty() {
            return Err(ExtractError::Extraction(
                "model returned no candidates".to_string(),
            ));
        }
        Ok(text)
    }
}

/// Slice out the outermost `{..}` block. Models habitually wrap JSON in
/// markdown fences or prose.
pub(crate) fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Slice out the outermost `[..]` block.
pub(crate) fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_generate_response() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "```json\n{\"Protein\": 10}\n```"}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        }"#;
        let data: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(data.candidates.len(), 1);
        assert!(data.candidates[0].content.parts[0].text.contains("Protein"));
    }

    #[test]
    fn json_object_extracted_from_markdown_fences() {
        let text = "```json\n{\"Protein\": 10, \"Sodium\": null}\n```";
        assert_eq!(
            extract_json_object(text),
            Some("{\"Protein\": 10, \"Sodium\": null}")
        );
    }

    #[test]
    fn json_object_spans_nested_braces() {
        let text = "Here you go: {\"a\": {\"b\": 1}} hope that helps";
        assert_eq!(extract_json_object(text), Some("{\"a\": {\"b\": 1}}"));
    }

    #[test]
    fn no_object_yields_none() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("} backwards {"), None);
    }

    #[test]
    fn json_array_extraction() {
        let text = "```json\n[\"warning one\", \"warning two\"]\n```";
        assert_eq!(
            extract_json_array(text),
            Some("[\"warning one\", \"warning two\"]")
        );
        assert_eq!(extract_json_array("None"), None);
    }

    #[test]
    fn extraction_prompt_names_every_tracked_nutrient() {
        for nutrient in rna_core::Nutrient::ALL {
            assert!(
                EXTRACTION_PROMPT.contains(&format!("\"{nutrient}\"")),
                "prompt is missing {nutrient}"
            );
        }
    }
}
