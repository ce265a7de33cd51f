//! Audit policy configuration: safety limits and discrepancy threshold.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use rna_core::verdict::{
    default_safety_limits, AuditPolicy, CRITICAL_NUTRIENTS, DEFAULT_DISCREPANCY_THRESHOLD_PCT,
};
use rna_core::Nutrient;

const fn default_threshold() -> f64 {
    DEFAULT_DISCREPANCY_THRESHOLD_PCT
}

fn default_critical() -> Vec<Nutrient> {
    CRITICAL_NUTRIENTS.to_vec()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditConfig {
    /// Relative label-vs-USDA difference, in percent, above which a
    /// discrepancy notice is raised.
    #[serde(default = "default_threshold")]
    pub discrepancy_threshold_pct: f64,

    /// Nutrients checked by the verdict engine, in order.
    #[serde(default = "default_critical")]
    pub critical: Vec<Nutrient>,

    /// Per-nutrient safety limits, keyed by printed-label name
    /// (e.g. `"Saturated Fat" = 5.0` in TOML).
    #[serde(default = "default_safety_limits")]
    pub limits: BTreeMap<Nutrient, f64>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            discrepancy_threshold_pct: default_threshold(),
            critical: default_critical(),
            limits: default_safety_limits(),
        }
    }
}

impl AuditConfig {
    /// Materialize the verdict-engine policy from this configuration.
    #[must_use]
    pub fn to_policy(&self) -> AuditPolicy {
        AuditPolicy {
            critical: self.critical.clone(),
            limits: self.limits.clone(),
            discrepancy_threshold_pct: self.discrepancy_threshold_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_engine_constants() {
        let config = AuditConfig::default();
        assert_eq!(config.discrepancy_threshold_pct, 20.0);
        assert_eq!(config.critical, CRITICAL_NUTRIENTS.to_vec());
        assert_eq!(config.limits[&Nutrient::Sodium], 140.0);
        assert_eq!(config.limits[&Nutrient::TransFat], 0.1);
    }

    #[test]
    fn to_policy_carries_every_field() {
        let config = AuditConfig {
            discrepancy_threshold_pct: 15.0,
            critical: vec![Nutrient::Sodium],
            ..AuditConfig::default()
        };

        let policy = config.to_policy();
        assert_eq!(policy.discrepancy_threshold_pct, 15.0);
        assert_eq!(policy.critical, vec![Nutrient::Sodium]);
        assert_eq!(policy.limits, config.limits);
    }
}
