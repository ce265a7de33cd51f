//! Serving-size normalization of per-100-unit nutrient records.

use crate::nutrient::NutrientMap;

/// Rescale a per-100-unit nutrient record to a target serving size.
///
/// `ratio = serving_size / 100`; each value is multiplied by the ratio and
/// rounded to 2 decimal places. A missing, zero, or negative serving size is
/// treated as 100 (ratio 1.0) so a bad label can never zero out or invert an
/// entire record.
#[must_use]
pub fn normalize(per_100: &NutrientMap, serving_size: Option<f64>) -> NutrientMap {
    let ratio = match serving_size {
        Some(size) if size > 0.0 => size / 100.0,
        _ => 1.0,
    };
    per_100
        .iter()
        .map(|(nutrient, value)| (*nutrient, round2(value * ratio)))
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::normalize;
    use crate::nutrient::{Nutrient, NutrientMap};

    fn per_100() -> NutrientMap {
        NutrientMap::from([(Nutrient::Protein, 10.0), (Nutrient::Sodium, 333.0)])
    }

    #[test]
    fn scales_to_serving_ratio() {
        let scaled = normalize(&per_100(), Some(30.0));
        assert_eq!(scaled[&Nutrient::Protein], 3.0);
        assert_eq!(scaled[&Nutrient::Sodium], 99.9);
    }

    #[test]
    fn rounds_to_two_decimals() {
        let raw = NutrientMap::from([(Nutrient::Sugar, 4.567)]);
        let scaled = normalize(&raw, Some(33.0));
        assert_eq!(scaled[&Nutrient::Sugar], 1.51);
    }

    #[test]
    fn missing_serving_size_keeps_per_100_values() {
        let scaled = normalize(&per_100(), None);
        assert_eq!(scaled[&Nutrient::Protein], 10.0);
        assert_eq!(scaled[&Nutrient::Sodium], 333.0);
    }

    #[test]
    fn zero_or_negative_serving_size_is_guarded() {
        assert_eq!(normalize(&per_100(), Some(0.0))[&Nutrient::Protein], 10.0);
        assert_eq!(normalize(&per_100(), Some(-5.0))[&Nutrient::Protein], 10.0);
    }
}
