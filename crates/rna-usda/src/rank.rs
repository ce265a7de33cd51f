//! Relevance ranking of candidate foods.
//!
//! FoodData Central's own ordering mixes data types and surfaces near-miss
//! brands first. Candidates are filtered to the types that carry label-grade
//! data, then scored against the query with token-sorted Jaro-Winkler so
//! word order ("Yogurt Chobani" vs "Chobani Yogurt") does not matter.

use serde::Serialize;
use std::cmp::Ordering;

use crate::search::Food;

/// Data types with label-comparable nutrient records.
pub const ALLOWED_DATA_TYPES: &[&str] = &["Branded", "Foundation", "Survey (FNDDS)"];

/// A candidate food with its query-relevance score (0–100).
#[derive(Debug, Clone, Serialize)]
pub struct RankedFood {
    pub relevance: f64,
    #[serde(flatten)]
    pub food: Food,
}

/// Filter to allowed data types, score against the query, and return the
/// best `limit` candidates in descending relevance order.
#[must_use]
pub fn rank(foods: Vec<Food>, query: &str, limit: usize) -> Vec<RankedFood> {
    let mut ranked: Vec<RankedFood> = foods
        .into_iter()
        .filter(|f| ALLOWED_DATA_TYPES.contains(&f.data_type.as_str()))
        .map(|food| RankedFood {
            relevance: relevance(query, &food),
            food,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(limit);
    ranked
}

/// Weighted average of description and brand similarity. The description is
/// usually more distinctive than the brand, but a brand hit should still
/// lift an otherwise generic description.
#[must_use]
pub fn relevance(query: &str, food: &Food) -> f64 {
    let desc_score = token_sort_ratio(query, &food.description);
    let brand_score = food.brand().map_or(0.0, |b| token_sort_ratio(query, b));
    (desc_score * 0.5) + (brand_score * 0.5)
}

/// Jaro-Winkler similarity (0–100) over lowercased, alphabetically sorted
/// tokens, so word order does not affect the score.
#[must_use]
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    strsim::jaro_winkler(&token_sort(a), &token_sort(b)) * 100.0
}

fn token_sort(text: &str) -> String {
    let mut tokens: Vec<String> = text
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    tokens.sort();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn food(description: &str, brand: Option<&str>, data_type: &str) -> Food {
        Food {
            fdc_id: 1,
            description: description.to_string(),
            data_type: data_type.to_string(),
            brand_name: brand.map(str::to_string),
            brand_owner: None,
            package_weight: None,
            serving_size: None,
            serving_size_unit: None,
            food_nutrients: Vec::new(),
            ingredients: None,
        }
    }

    #[test]
    fn token_order_does_not_change_the_score() {
        let forward = token_sort_ratio("chobani yogurt", "yogurt chobani");
        assert_eq!(forward, 100.0);
    }

    #[test]
    fn exact_match_outranks_partial_match() {
        let foods = vec![
            food("Cheddar Cheese", Some("Tillamook"), "Branded"),
            food("Greek Yogurt", Some("Chobani"), "Branded"),
        ];
        let ranked = rank(foods, "chobani greek yogurt", 5);
        assert_eq!(ranked[0].food.description, "Greek Yogurt");
        assert!(ranked[0].relevance > ranked[1].relevance);
    }

    #[test]
    fn disallowed_data_types_are_dropped() {
        let foods = vec![
            food("Yogurt, plain", None, "SR Legacy"),
            food("Greek Yogurt", Some("Chobani"), "Branded"),
            food("Yogurt, Greek", None, "Survey (FNDDS)"),
        ];
        let ranked = rank(foods, "greek yogurt", 5);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.food.data_type != "SR Legacy"));
    }

    #[test]
    fn limit_truncates_after_sorting() {
        let foods = vec![
            food("Plain Yogurt", None, "Branded"),
            food("Greek Yogurt", None, "Branded"),
            food("Frozen Yogurt Bar", None, "Branded"),
        ];
        let ranked = rank(foods, "greek yogurt", 1);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].food.description, "Greek Yogurt");
    }

    #[test]
    fn missing_brand_scores_on_description_alone() {
        let branded = food("Greek Yogurt", Some("Chobani"), "Branded");
        let generic = food("Greek Yogurt", None, "Branded");
        assert!(relevance("chobani", &branded) > relevance("chobani", &generic));
    }
}
