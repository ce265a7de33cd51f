//! Detail lookup: raw food record → canonical, serving-scaled nutrients.

use serde::{Deserialize, Serialize};

use rna_core::{normalize, Nutrient, NutrientMap};

use crate::search::Food;
use crate::{UsdaClient, UsdaError};

/// FDC nutrient ids for the tracked nutrient set.
const NUTRIENT_IDS: &[(u32, Nutrient)] = &[
    (1003, Nutrient::Protein),
    (1093, Nutrient::Sodium),
    (1092, Nutrient::Potassium),
    (1091, Nutrient::Phosphorus),
    (2000, Nutrient::Sugar),
    (1008, Nutrient::Calories),
    (1004, Nutrient::TotalFat),
    (1258, Nutrient::SaturatedFat),
    (1257, Nutrient::TransFat),
    (1079, Nutrient::Fiber),
];

fn nutrient_for_id(id: u32) -> Option<Nutrient> {
    NUTRIENT_IDS
        .iter()
        .find(|(nid, _)| *nid == id)
        .map(|(_, n)| *n)
}

/// A food's reference data, scaled to its declared serving size and ready
/// for the comparison table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodDetails {
    pub fdc_id: u64,
    pub product_description: String,
    pub brand_name: String,
    pub serving_size: Option<f64>,
    pub serving_size_unit: String,
    /// Nutrients per serving, in each nutrient's unit convention.
    pub nutrients: NutrientMap,
    pub ingredients: Option<String>,
}

impl FoodDetails {
    /// Map a raw food record to canonical nutrients.
    ///
    /// Branded data reports per 100 g/ml; values are rescaled to the
    /// declared serving size (per-100 kept as-is when no serving size is
    /// declared). Nutrient ids outside the tracked set are dropped.
    #[must_use]
    pub fn from_food(food: Food) -> Self {
        let mut per_100 = NutrientMap::new();
        for reading in &food.food_nutrients {
            if let Some(nutrient) = nutrient_for_id(reading.nutrient_id) {
                per_100.insert(nutrient, reading.value);
            }
        }
        let nutrients = normalize(&per_100, food.serving_size);

        Self {
            fdc_id: food.fdc_id,
            product_description: clean_label(&food.description),
            brand_name: food
                .brand()
                .map_or_else(|| "Generic".to_string(), title_case),
            serving_size: food.serving_size,
            serving_size_unit: food.serving_size_unit.unwrap_or_else(|| "g".to_string()),
            nutrients,
            ingredients: food.ingredients,
        }
    }
}

impl UsdaClient {
    /// Fetch and map one food's reference data by FDC id.
    ///
    /// # Errors
    ///
    /// Returns [`UsdaError::NotFound`] when the id resolves to nothing, or
    /// any transport/API error from the underlying search.
    pub async fn food_details(&self, fdc_id: u64) -> Result<FoodDetails, UsdaError> {
        let results = self.search_paged(&fdc_id.to_string(), 1).await?;
        let food = results
            .foods
            .into_iter()
            .next()
            .ok_or(UsdaError::NotFound { fdc_id })?;
        Ok(FoodDetails::from_food(food))
    }
}

/// Trim and title-case a shouty USDA description ("GREEK YOGURT, PLAIN" →
/// "Greek Yogurt, Plain").
#[must_use]
pub fn clean_label(text: &str) -> String {
    title_case(text.trim())
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
