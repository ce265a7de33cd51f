//! The tiered audit verdict: safety-limit flags and discrepancy notices.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::comparison::ComparisonTable;
use crate::delta::delta;
use crate::nutrient::Nutrient;

/// Default relative discrepancy threshold, in percent. The clinical team has
/// run this anywhere from 10 to 20; it is policy, not algorithm.
pub const DEFAULT_DISCREPANCY_THRESHOLD_PCT: f64 = 20.0;

/// Nutrients subject to both the absolute safety limit and discrepancy
/// monitoring, in verdict iteration order.
pub const CRITICAL_NUTRIENTS: &[Nutrient] = &[
    Nutrient::Protein,
    Nutrient::Sodium,
    Nutrient::Potassium,
    Nutrient::Phosphorus,
    Nutrient::Sugar,
    Nutrient::SaturatedFat,
    Nutrient::TransFat,
];

/// Per-serving safety limits for a renal diet, in each nutrient's unit.
#[must_use]
pub fn default_safety_limits() -> BTreeMap<Nutrient, f64> {
    BTreeMap::from([
        (Nutrient::Protein, 15.0),
        (Nutrient::Sodium, 140.0),
        (Nutrient::Potassium, 200.0),
        (Nutrient::Phosphorus, 100.0),
        (Nutrient::Sugar, 15.0),
        (Nutrient::SaturatedFat, 5.0),
        (Nutrient::TransFat, 0.1),
    ])
}

// ---------------------------------------------------------------------------
// ReportColor
// ---------------------------------------------------------------------------

/// Severity tier of an audit report.
///
/// Ordered: green (safe) < yellow (data mismatch) < red (limit breach).
/// Red dominates and is never downgraded within one audit pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportColor {
    Green,
    Yellow,
    Red,
}

impl ReportColor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }

    /// Raise severity to at least `other`; never downgrades.
    #[must_use]
    pub fn escalate(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for ReportColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditPolicy
// ---------------------------------------------------------------------------

/// Tunable thresholds driving the verdict. The algorithm never hard-codes a
/// limit or a percentage; everything a dietitian might revise lives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditPolicy {
    /// Nutrients checked, in iteration (and therefore message) order.
    pub critical: Vec<Nutrient>,
    /// Maximum safe absolute value per nutrient. A nutrient without an entry
    /// skips the limit check but still gets discrepancy monitoring.
    pub limits: BTreeMap<Nutrient, f64>,
    /// Relative label-vs-USDA difference, in percent, above which a
    /// discrepancy notice is raised.
    pub discrepancy_threshold_pct: f64,
}

impl Default for AuditPolicy {
    fn default() -> Self {
        Self {
            critical: CRITICAL_NUTRIENTS.to_vec(),
            limits: default_safety_limits(),
            discrepancy_threshold_pct: DEFAULT_DISCREPANCY_THRESHOLD_PCT,
        }
    }
}

// ---------------------------------------------------------------------------
// AuditReport
// ---------------------------------------------------------------------------

/// Outcome of one audit pass over a comparison-table snapshot. Immutable
/// once produced; consumed by presentation and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub status: String,
    pub color: ReportColor,
    /// Safety-limit violations, in critical-nutrient order.
    pub flags: Vec<String>,
    /// Label-vs-USDA mismatches, in critical-nutrient order.
    pub discrepancies: Vec<String>,
}

impl AuditReport {
    fn safe() -> Self {
        Self {
            status: "Renal Safe".to_string(),
            color: ReportColor::Green,
            flags: Vec::new(),
            discrepancies: Vec::new(),
        }
    }
}

/// Run the verdict over a comparison-table snapshot.
///
/// For each critical nutrient, both sides are viewed zero-safe (a missing
/// reading contributes nothing and can never breach a limit) and checked
/// against the absolute limit; then the delta over the same zero-coerced
/// pair is checked against the discrepancy threshold. The zero-label guard
/// inside [`delta`] means a genuinely missing label reading never produces
/// a discrepancy either.
///
/// Total: always returns a report, even over a fully empty table.
#[must_use]
pub fn audit(table: &ComparisonTable, policy: &AuditPolicy) -> AuditReport {
    let mut report = AuditReport::safe();

    for &nutrient in &policy.critical {
        let entry = table.entry(nutrient);
        let label = entry.label.unwrap_or(0.0);
        let usda = entry.usda.unwrap_or(0.0);
        let unit = nutrient.unit();

        if let Some(&limit) = policy.limits.get(&nutrient) {
            if label > limit {
                report.flags.push(format!(
                    "Label {nutrient}: {label}{unit} exceeds safe limit of {limit}{unit} (+{}{unit})",
                    label - limit
                ));
                report.status = "High Renal Load".to_string();
                report.color = report.color.escalate(ReportColor::Red);
            }
            if usda > limit {
                report.flags.push(format!(
                    "USDA {nutrient}: {usda}{unit} exceeds safe limit of {limit}{unit} (+{}{unit})",
                    usda - limit
                ));
                report.status = "High Renal Load".to_string();
                report.color = report.color.escalate(ReportColor::Red);
            }
        }

        if let Some(pct) = delta(Some(label), Some(usda)) {
            if pct > policy.discrepancy_threshold_pct {
                report.discrepancies.push(format!(
                    "{nutrient}: label says {label}, but USDA suggests {usda}"
                ));
                // Red is sticky: a later mismatch never downgrades it.
                if report.color != ReportColor::Red {
                    report.status = "Data Mismatch".to_string();
                }
                report.color = report.color.escalate(ReportColor::Yellow);
            }
        }
    }

    report
}
