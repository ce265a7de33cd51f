//! Two-tier numeric coercion for heterogeneous external values.
//!
//! Label scans, manual entry, and USDA payloads hand us numbers, numeric
//! strings (sometimes with thousands separators), `"N/A"`, empty strings, or
//! JSON null, interchangeably. Rather than scattering type checks through the
//! engine, coercion happens once, here, with two policies that must not be
//! conflated:
//!
//! - [`reading`] preserves absence: "not measured" stays distinct from
//!   "measured as zero", so delta math can skip incomparable pairs.
//! - [`zero_safe`] degrades to zero: safety-limit checks treat a missing
//!   reading as no contribution, never as a failure.

use serde_json::Value;

/// Absence-preserving coercion. Returns `None` for null, empty or
/// whitespace-only strings, the literal `"null"` (case-insensitive), and
/// anything unparseable; otherwise the parsed number. Thousands separators
/// are stripped before parsing.
#[must_use]
pub fn reading(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
                return None;
            }
            trimmed.replace(',', "").parse::<f64>().ok()
        }
        _ => None,
    }
}

/// Zero-degrading coercion: [`reading`] with `0.0` for anything missing or
/// unparseable. Never fails.
#[must_use]
pub fn zero_safe(raw: &Value) -> f64 {
    reading(raw).unwrap_or(0.0)
}
