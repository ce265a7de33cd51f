//! # rna-core
//!
//! Nutrient model and audit reconciliation engine for Renal Audit.
//!
//! This crate holds the pure business rules shared across the workspace:
//! - The fixed nutrient set with its unit conventions
//! - Two-tier numeric coercion for heterogeneous external values
//! - Serving-size normalization of per-100-unit records
//! - The label-vs-USDA comparison table
//! - Percentage-delta math and the tiered safety verdict
//! - The audit session context that owns a table across merges
//!
//! Everything here is synchronous, total, and free of I/O. Network
//! collaborators (USDA lookup, label extraction, persistence) live in their
//! own crates and only hand plain data structures across this boundary.

pub mod coerce;
pub mod comparison;
pub mod delta;
pub mod nutrient;
pub mod serving;
pub mod session;
pub mod verdict;

pub use comparison::{ComparisonEntry, ComparisonTable};
pub use delta::delta;
pub use nutrient::{Nutrient, NutrientMap};
pub use serving::normalize;
pub use session::AuditSession;
pub use verdict::{audit, AuditPolicy, AuditReport, ReportColor};
