//! The label-vs-USDA comparison table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::nutrient::{Nutrient, NutrientMap};

/// One nutrient's readings from both sources. Either side may be absent —
/// absence means "not measured", never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub label: Option<f64>,
    pub usda: Option<f64>,
}

/// Per-nutrient comparison of label and USDA readings.
///
/// Every nutrient in [`Nutrient::ALL`] is always present as a key, so
/// consumers can rely on key presence and only ever reason about absent
/// values. Updates re-derive a whole side from the latest source map rather
/// than patching individual nutrients, so the table can never retain a value
/// from a source that has since been cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    entries: BTreeMap<Nutrient, ComparisonEntry>,
}

impl Default for ComparisonTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonTable {
    /// A fresh table covering the full nutrient set, both sides absent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Nutrient::ALL
                .iter()
                .map(|n| (*n, ComparisonEntry::default()))
                .collect(),
        }
    }

    /// Merge the latest known source data into the table.
    ///
    /// For each provided, non-empty side, EVERY entry's reading for that side
    /// is replaced by the map's value for that nutrient — including clearing
    /// it when the map no longer carries the key. A `None` (or empty) side
    /// leaves that side untouched, so `update(None, None)` is a no-op.
    pub fn update(&mut self, label: Option<&NutrientMap>, usda: Option<&NutrientMap>) {
        let label = label.filter(|m| !m.is_empty());
        let usda = usda.filter(|m| !m.is_empty());
        for (nutrient, entry) in &mut self.entries {
            if let Some(map) = label {
                entry.label = map.get(nutrient).copied();
            }
            if let Some(map) = usda {
                entry.usda = map.get(nutrient).copied();
            }
        }
    }

    /// Both readings for a nutrient. A nutrient outside the tracked set
    /// reads as absent on both sides rather than failing.
    #[must_use]
    pub fn entry(&self, nutrient: Nutrient) -> ComparisonEntry {
        self.entries.get(&nutrient).copied().unwrap_or_default()
    }

    /// Entries in the fixed display order.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, ComparisonEntry)> + '_ {
        self.entries.iter().map(|(n, e)| (*n, *e))
    }
}
