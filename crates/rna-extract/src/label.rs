//! Structured label data and its boundary coercion.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use rna_core::{coerce, Nutrient, NutrientMap};

/// Everything read off a nutrition facts panel, whether extracted or
/// manually entered. Nutrients absent from the panel are absent from the
/// map — never stored as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelInfo {
    pub product_name: Option<String>,
    pub brand: Option<String>,
    pub serving_size: Option<f64>,
    pub serving_unit: Option<String>,
    pub nutrients: NutrientMap,
    pub ingredients: Option<String>,
}

impl LabelInfo {
    /// Build from the extractor's wire format: a JSON object keyed by the
    /// printed-label field names ("Product Name", "Serving Size", one key per
    /// nutrient). Values arrive as numbers, numeric strings, or null
    /// interchangeably; coercion happens here, once, so downstream code only
    /// sees normalized numbers.
    #[must_use]
    pub fn from_json(raw: &Value) -> Self {
        let Some(obj) = raw.as_object() else {
            return Self::default();
        };

        let nutrients: NutrientMap = Nutrient::ALL
            .iter()
            .filter_map(|n| {
                obj.get(n.as_str())
                    .and_then(coerce::reading)
                    .map(|value| (*n, value))
            })
            .collect();

        Self {
            product_name: string_field(obj, "Product Name"),
            brand: string_field(obj, "Brand"),
            serving_size: obj.get("Serving Size").and_then(coerce::reading),
            serving_unit: string_field(obj, "Serving Unit"),
            nutrients,
            ingredients: string_field(obj, "Ingredients"),
        }
    }
}

fn string_field(obj: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
