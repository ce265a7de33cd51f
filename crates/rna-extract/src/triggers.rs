//! Ingredient-text analysis for risks the numeric panel cannot show.

use crate::llm::extract_json_array;
use crate::{ExtractClient, ExtractError};

const TRIGGER_PROMPT: &str = r#"You are a clinical renal dietitian and gout specialist.
Analyze the following ingredient list for specific 'Hidden Triggers':

1. PHOSPHORUS ADDITIVES: Look for 'phos' (e.g., Sodium Tripolyphosphate, Phosphoric Acid).
2. GOUT TRIGGERS: High-purine items (Yeast Extract, Organ Meats, Anchovies) and High Fructose Corn Syrup.
3. POTASSIUM SALTS: (e.g., Potassium Chloride) used as salt substitutes.
4. INFLAMMATORY FATS: (Trans-fats, Hydrogenated oils, Lard).

INGREDIENTS:
"#;

impl ExtractClient {
    /// Scan label and/or USDA ingredient text for hidden renal and gout
    /// triggers. Returns one short warning per trigger found; an empty list
    /// when the text is clean or no usable text was given.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] if the model call itself fails.
    pub async fn ingredient_triggers(
        &self,
        label_ingredients: Option<&str>,
        usda_ingredients: Option<&str>,
    ) -> Result<Vec<String>, ExtractError> {
        let combined = [label_ingredients, usda_ingredients]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|text| !text.is_empty() && *text != "Not Available")
            .collect::<Vec<_>>()
            .join("\n");
        if combined.is_empty() {
            return Ok(Vec::new());
        }

        let prompt = format!(
            "{TRIGGER_PROMPT}{combined}\n\nOUTPUT FORMAT:\n\
             Return ONLY a JSON list of strings. Each string should be a short warning.\n\
             Example: [\"Contains Phosphoric Acid (Hidden Phosphorus)\", \"Contains High Fructose Corn Syrup (Gout Trigger)\"]\n\
             If no triggers are found, return []."
        );
        let text = self.generate(&prompt).await?;

        // No array in the response means the model found nothing to report.
        let Some(json) = extract_json_array(&text) else {
            return Ok(Vec::new());
        };
        serde_json::from_str(json)
            .map_err(|e| ExtractError::Extraction(format!("model returned invalid JSON: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::llm::extract_json_array;

    #[test]
    fn warning_list_parses_from_fenced_response() {
        let response = "```json\n[\"Contains Potassium Chloride (Salt Substitute)\"]\n```";
        let json = extract_json_array(response).unwrap();
        let warnings: Vec<String> = serde_json::from_str(json).unwrap();
        assert_eq!(
            warnings,
            vec!["Contains Potassium Chloride (Salt Substitute)"]
        );
    }

    #[test]
    fn prose_none_response_has_no_array() {
        assert_eq!(extract_json_array("No triggers found."), None);
    }
}
