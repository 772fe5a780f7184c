//! Specification matching engine and scoring algorithms.
//!
//! This module provides the core matching functionality:
//!
//! - [`SpecMatcher`]: Main entry point for scoring and ranking products
//! - [`SpecMatchResult`]: Per-product score with matched/unmatched attributes
//! - [`SpecWeights`]: Configurable per-attribute weights
//!
//! ## Scoring
//!
//! Six attributes contribute to a weighted percentage:
//!
//! | Attribute  | Weight | Rule |
//! |------------|--------|------|
//! | Voltage    | 20     | graded by numeric distance (exact / ±1 / ±5 kV) |
//! | Conductor  | 15     | normalized string equality |
//! | Insulation | 20     | normalized equality or same family (XLPE/PVC/LSZH) |
//! | Size       | 25     | core count + cross-section closeness, partial credit |
//! | Armoring   | 10     | normalized equality or same type (SWA/AWA/unarmoured) |
//! | Standard   | 10     | normalized equality or same family + number |
//!
//! Only attributes present on **both** sides count toward the achievable
//! maximum; the final score is the awarded fraction of that maximum,
//! rounded to an integer percentage. Near-misses below the acceptance
//! threshold still earn their raw credit but are reported as gaps.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rfp_solver::{ProductCatalog, RequirementSpec, SpecMatcher};
//!
//! let catalog = ProductCatalog::load_embedded().unwrap();
//! let requirement = RequirementSpec::new()
//!     .with_voltage("11kV")
//!     .with_size("3C x 185 sq.mm")
//!     .with_insulation("XLPE");
//!
//! let matcher = SpecMatcher::new();
//! let matches = matcher.find_top_matches(&requirement, &catalog.products, 3);
//!
//! for m in &matches {
//!     println!("{}: {}%", m.product.sku, m.match_score);
//! }
//! ```
//!
//! [`SpecMatcher`]: engine::SpecMatcher
//! [`SpecMatchResult`]: engine::SpecMatchResult
//! [`SpecWeights`]: scoring::SpecWeights

pub mod engine;
pub mod scoring;
