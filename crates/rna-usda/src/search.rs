//! `/foods/search` request and response DTOs.

use serde::{Deserialize, Serialize};

use crate::http::check_response;
use crate::{UsdaClient, UsdaError};

/// Response envelope from `/v1/foods/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub foods: Vec<Food>,
}

/// One candidate food from a search. Branded foods report nutrients per
/// 100 g/ml alongside the package serving size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    #[serde(default)]
    pub fdc_id: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub data_type: String,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub brand_owner: Option<String>,
    #[serde(default)]
    pub package_weight: Option<String>,
    #[serde(default)]
    pub serving_size: Option<f64>,
    #[serde(default)]
    pub serving_size_unit: Option<String>,
    #[serde(default)]
    pub food_nutrients: Vec<FoodNutrient>,
    #[serde(default)]
    pub ingredients: Option<String>,
}

impl Food {
    /// Brand name with owner fallback; `None` when both are absent or empty.
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.brand_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.brand_owner.as_deref().filter(|s| !s.is_empty()))
    }
}

/// One nutrient reading inside a food, identified by FDC nutrient id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodNutrient {
    #[serde(default)]
    pub nutrient_id: u32,
    #[serde(default)]
    pub value: f64,
}

impl UsdaClient {
    /// Search FoodData Central for foods matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`UsdaError`] if no API key is configured, the HTTP request
    /// fails, the API returns a non-success status, or the response cannot
    /// be parsed.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, UsdaError> {
        self.search_paged(query, self.page_size).await
    }

    pub(crate) async fn search_paged(
        &self,
        query: &str,
        page_size: u32,
    ) -> Result<SearchResponse, UsdaError> {
        if self.api_key.is_empty() {
            return Err(UsdaError::MissingApiKey);
        }
        let url = format!(
            "{}/foods/search?api_key={}&query={}&pageSize={page_size}",
            self.base_url,
            self.api_key,
            urlencoding::encode(query)
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
pub(crate) const SEARCH_FIXTURE: &str = r#"{
    "totalHits": 2,
    "foods": [
        {
            "fdcId": 2038064,
            "description": "GREEK YOGURT, PLAIN",
            "dataType": "Branded",
            "brandName": "CHOBANI",
            "brandOwner": "Chobani, LLC",
            "packageWeight": "32 oz",
            "servingSize": 150.0,
            "servingSizeUnit": "g",
            "ingredients": "CULTURED NONFAT MILK, CREAM, SODIUM TRIPOLYPHOSPHATE.",
            "foodNutrients": [
                {"nutrientId": 1003, "value": 10.0},
                {"nutrientId": 1093, "value": 36.0},
                {"nutrientId": 1092, "value": 141.0},
                {"nutrientId": 1091, "value": 135.0},
                {"nutrientId": 2000, "value": 4.0},
                {"nutrientId": 1008, "value": 73.0},
                {"nutrientId": 1004, "value": 1.92},
                {"nutrientId": 1258, "value": 1.25},
                {"nutrientId": 1079, "value": 0.0}
            ]
        },
        {
            "fdcId": 171284,
            "description": "Yogurt, Greek, plain, nonfat",
            "dataType": "SR Legacy",
            "brandOwner": null,
            "foodNutrients": [
                {"nutrientId": 1003, "value": 10.19}
            ]
        }
    ]
}"#;
