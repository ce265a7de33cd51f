//! The fixed nutrient set and its unit conventions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Nutrient readings keyed by nutrient. An absent key means the source did
/// not report that nutrient, which is distinct from a reported zero.
pub type NutrientMap = BTreeMap<Nutrient, f64>;

/// A nutrient tracked on a nutrition facts panel.
///
/// Serialized with the printed-label names ("Total Fat", not `total_fat`)
/// because those are the wire keys used by the label-extraction collaborator
/// and the persistence columns. `Ord` follows declared order, which is the
/// fixed display and iteration order everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nutrient {
    Protein,
    Sodium,
    Potassium,
    Phosphorus,
    Sugar,
    Calories,
    #[serde(rename = "Total Fat")]
    TotalFat,
    #[serde(rename = "Saturated Fat")]
    SaturatedFat,
    #[serde(rename = "Trans Fat")]
    TransFat,
    Fiber,
}

impl Nutrient {
    /// Every tracked nutrient, in display order. This is the comparison
    /// table's key set.
    pub const ALL: &'static [Self] = &[
        Self::Protein,
        Self::Sodium,
        Self::Potassium,
        Self::Phosphorus,
        Self::Sugar,
        Self::Calories,
        Self::TotalFat,
        Self::SaturatedFat,
        Self::TransFat,
        Self::Fiber,
    ];

    /// The printed-label name, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Protein => "Protein",
            Self::Sodium => "Sodium",
            Self::Potassium => "Potassium",
            Self::Phosphorus => "Phosphorus",
            Self::Sugar => "Sugar",
            Self::Calories => "Calories",
            Self::TotalFat => "Total Fat",
            Self::SaturatedFat => "Saturated Fat",
            Self::TransFat => "Trans Fat",
            Self::Fiber => "Fiber",
        }
    }

    /// Unit convention: mg for the electrolytes, kcal for calories, g for
    /// the rest.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Sodium | Self::Potassium | Self::Phosphorus => "mg",
            Self::Calories => "kcal",
            Self::Protein
            | Self::Sugar
            | Self::TotalFat
            | Self::SaturatedFat
            | Self::TransFat
            | Self::Fiber => "g",
        }
    }

    /// Parse a printed-label name back into a nutrient.
    #[must_use]
    pub fn from_label(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|n| n.as_str() == name)
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn serde_uses_label_names() {
        let json = serde_json::to_string(&Nutrient::TotalFat).unwrap();
        assert_eq!(json, "\"Total Fat\"");
        let recovered: Nutrient = serde_json::from_str("\"Saturated Fat\"").unwrap();
        assert_eq!(recovered, Nutrient::SaturatedFat);
    }

    #[test]
    fn map_keys_serialize_as_label_names() {
        let mut map = NutrientMap::new();
        map.insert(Nutrient::TransFat, 0.5);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["Trans Fat"], 0.5);
    }

    #[test]
    fn from_label_roundtrips_every_nutrient() {
        for nutrient in Nutrient::ALL {
            assert_eq!(Nutrient::from_label(nutrient.as_str()), Some(*nutrient));
        }
        assert_eq!(Nutrient::from_label("Cholesterol"), None);
    }

    #[test]
    fn declared_order_drives_ord() {
        assert!(Nutrient::Protein < Nutrient::Sodium);
        assert!(Nutrient::Calories < Nutrient::TotalFat);
        let mut map = NutrientMap::new();
        map.insert(Nutrient::Fiber, 2.0);
        map.insert(Nutrient::Protein, 10.0);
        let keys: Vec<Nutrient> = map.keys().copied().collect();
        assert_eq!(keys, vec![Nutrient::Protein, Nutrient::Fiber]);
    }

    #[test]
    fn units_follow_convention() {
        assert_eq!(Nutrient::Sodium.unit(), "mg");
        assert_eq!(Nutrient::Potassium.unit(), "mg");
        assert_eq!(Nutrient::Phosphorus.unit(), "mg");
        assert_eq!(Nutrient::Calories.unit(), "kcal");
        assert_eq!(Nutrient::Protein.unit(), "g");
        assert_eq!(Nutrient::TransFat.unit(), "g");
    }
}
