//! The audit session: explicit owner of one comparison table.
//!
//! The session replaces ambient per-request state with a value the
//! orchestrating caller owns and threads through. Source data is merged only
//! after a fetch has fully succeeded; a failed fetch never touches the table.

use serde::{Deserialize, Serialize};

use crate::comparison::ComparisonTable;
use crate::nutrient::NutrientMap;
use crate::verdict::{audit, AuditPolicy, AuditReport};

/// One single-record audit in progress: a comparison table plus the merge
/// points that feed it as each source becomes available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditSession {
    table: ComparisonTable,
}

impl AuditSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a completed label scan. Re-derives the whole label side, so a
    /// re-scan clears nutrients the new scan no longer reports.
    pub fn apply_label(&mut self, values: &NutrientMap) {
        self.table.update(Some(values), None);
    }

    /// Merge a completed USDA lookup, already scaled to serving size.
    pub fn apply_usda(&mut self, values: &NutrientMap) {
        self.table.update(None, Some(values));
    }

    #[must_use]
    pub fn table(&self) -> &ComparisonTable {
        &self.table
    }

    /// Produce an independent report from the current table snapshot.
    #[must_use]
    pub fn audit(&self, policy: &AuditPolicy) -> AuditReport {
        audit(&self.table, policy)
    }
}
