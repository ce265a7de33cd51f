//! Flat record construction for the audit database.
//!
//! Keys here MUST match the Airtable column names exactly; they are the one
//! place the database schema leaks into code.

use chrono::Utc;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use rna_core::{AuditReport, Nutrient};
use rna_extract::LabelInfo;
use rna_usda::FoodDetails;

/// Build the flat field map for one finalized audit: product identity,
/// serving info, both nutrient sources, and the report summary.
#[must_use]
pub fn prepare_record(
    details: &FoodDetails,
    label: Option<&LabelInfo>,
    report: &AuditReport,
) -> BTreeMap<String, Value> {
    let mut record = BTreeMap::new();

    record.insert(
        "Product".to_string(),
        json!(details.product_description.clone()),
    );
    record.insert("Brand".to_string(), json!(details.brand_name.clone()));
    record.insert("FDC_ID".to_string(), json!(details.fdc_id.to_string()));
    record.insert(
        "Ingredients".to_string(),
        json!(details.ingredients.clone().unwrap_or_default()),
    );
    record.insert(
        "USDA Serving Size".to_string(),
        json!(details.serving_size.unwrap_or(100.0)),
    );
    record.insert(
        "USDA Serving Unit".to_string(),
        json!(details.serving_size_unit.clone()),
    );

    for &nutrient in Nutrient::ALL {
        record.insert(
            format!("USDA {} ({})", nutrient, nutrient.unit()),
            json!(details.nutrients.get(&nutrient).copied().unwrap_or(0.0)),
        );
    }

    if let Some(label) = label {
        if let Some(size) = label.serving_size {
            record.insert("Label Serving Size".to_string(), json!(size));
        }
        if let Some(unit) = &label.serving_unit {
            record.insert("Label Serving Unit".to_string(), json!(unit.clone()));
        }
        for (&nutrient, &value) in &label.nutrients {
            record.insert(
                format!("Label {} ({})", nutrient, nutrient.unit()),
                json!(value),
            );
        }
    }

    record.insert("Verdict".to_string(), json!(report.status.clone()));
    record.insert(
        "Verdict Color".to_string(),
        json!(report.color.as_str()),
    );
    record.insert("Flags".to_string(), json!(report.flags.join("\n")));
    record.insert(
        "Discrepancies".to_string(),
        json!(report.discrepancies.join("\n")),
    );
    record.insert("Audited At".to_string(), json!(Utc::now().to_rfc3339()));

    record
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use rna_core::{ComparisonTable, NutrientMap, ReportColor};

    fn details() -> FoodDetails {
        FoodDetails {
            fdc_id: 2_038_064,
            product_description: "Greek Yogurt, Plain".to_string(),
            brand_name: "Chobani".to_string(),
            serving_size: Some(150.0),
            serving_size_unit: "g".to_string(),
            nutrients: NutrientMap::from([
                (Nutrient::Protein, 15.0),
                (Nutrient::Sodium, 54.0),
            ]),
            ingredients: Some("Cultured nonfat milk, cream.".to_string()),
        }
    }

    fn report() -> AuditReport {
        rna_core::audit(&ComparisonTable::new(), &rna_core::AuditPolicy::default())
    }

    #[test]
    fn usda_columns_cover_the_full_nutrient_set() {
        let record = prepare_record(&details(), None, &report());
        assert_eq!(record["USDA Protein (g)"], 15.0);
        assert_eq!(record["USDA Sodium (mg)"], 54.0);
        // Unreported nutrients persist as zero, matching the table schema.
        assert_eq!(record["USDA Potassium (mg)"], 0.0);
        assert_eq!(record["USDA Calories (kcal)"], 0.0);
    }

    #[test]
    fn identity_and_serving_fields_are_flat() {
        let record = prepare_record(&details(), None, &report());
        assert_eq!(record["Product"], "Greek Yogurt, Plain");
        assert_eq!(record["Brand"], "Chobani");
        assert_eq!(record["FDC_ID"], "2038064");
        assert_eq!(record["USDA Serving Size"], 150.0);
        assert_eq!(record["USDA Serving Unit"], "g");
    }

    #[test]
    fn label_columns_appear_only_when_label_data_exists() {
        let without = prepare_record(&details(), None, &report());
        assert!(!without.contains_key("Label Protein (g)"));

        let label = LabelInfo {
            serving_size: Some(150.0),
            nutrients: NutrientMap::from([(Nutrient::Protein, 14.0)]),
            ..LabelInfo::default()
        };
        let with = prepare_record(&details(), Some(&label), &report());
        assert_eq!(with["Label Protein (g)"], 14.0);
        assert_eq!(with["Label Serving Size"], 150.0);
    }

    #[test]
    fn report_summary_is_flattened() {
        let record = prepare_record(&details(), None, &report());
        assert_eq!(record["Verdict"], "Renal Safe");
        assert_eq!(record["Verdict Color"], ReportColor::Green.as_str());
        assert_eq!(record["Flags"], "");
        assert!(record.contains_key("Audited At"));
    }
}
