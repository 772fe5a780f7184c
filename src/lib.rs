//! # rfp-solver
//!
//! A library for matching RFP tender requirements against a product catalog
//! and pricing the resulting response.
//!
//! When a cable tender arrives, the extracted technical requirements rarely
//! quote specifications the way the OEM catalog does: "11 kV" vs "11kV",
//! "3Cx185" vs "3C x 185 sq.mm", "IS7098" vs "IS 7098 Part 2". Picking the
//! right product, and defending the choice line by line, is tedious and
//! error-prone by hand.
//!
//! `rfp-solver` solves this by scoring every catalog product against the
//! requirement across six weighted attributes and producing an explainable
//! ranking, then rolling the selected SKU up into a deterministic quote.
//!
//! ## Features
//!
//! - **Weighted attribute scoring**: voltage, conductor, insulation, size,
//!   armoring and standard, each with its own tolerance rules
//! - **Explainable results**: per-attribute matched/unmatched labels plus
//!   human-readable strengths and gaps naming the compared values
//! - **Stable ranking**: descending score with catalog order breaking ties
//! - **Quantity-discounted pricing**: tiered discounts, itemized test and
//!   service costs with guaranteed fallback resolution
//! - **Strategy helpers**: margin scenarios, market estimates, risk levels
//!
//! ## Example
//!
//! ```rust,no_run
//! use rfp_solver::{PricingCalculator, PricingTable, ProductCatalog, RequirementSpec, SpecMatcher};
//!
//! // Load the embedded product catalog and pricing table
//! let catalog = ProductCatalog::load_embedded().unwrap();
//! let pricing = PricingTable::load_embedded().unwrap();
//!
//! // Requirements as extracted from the tender
//! let requirement = RequirementSpec::new()
//!     .with_voltage("11kV")
//!     .with_size("3C x 185 sq.mm")
//!     .with_insulation("XLPE")
//!     .with_standard("IS 7098");
//!
//! // Rank the catalog
//! let matcher = SpecMatcher::new();
//! let matches = matcher.find_top_matches(&requirement, &catalog.products, 3);
//!
//! for m in &matches {
//!     println!("{}: {}%", m.product.sku, m.match_score);
//! }
//!
//! // Price the best match
//! if let Some(best) = matches.first() {
//!     let calculator = PricingCalculator::new(&pricing);
//!     let quote = calculator
//!         .calculate_price(best.product.sku.as_str(), 5000, &[], &[])
//!         .unwrap();
//!     println!("quoted total: {}", quote.total);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Product catalog storage and indexing
//! - [`core`]: Core data types for products, requirements, and tenders
//! - [`matching`]: Matching engine and scoring algorithms
//! - [`parsing`]: Parsers for free-text specification fields
//! - [`pricing`]: Cost roll-up, pricing table, and strategy helpers
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod pricing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::ProductCatalog;
pub use core::product::{Product, ProductSpecification};
pub use core::requirement::{RequirementSpec, TenderRequest};
pub use core::types::*;
pub use matching::engine::{SpecMatchResult, SpecMatcher};
pub use matching::scoring::SpecWeights;
pub use pricing::calculator::{PriceCalculation, PricingCalculator};
pub use pricing::data::{PricingData, PricingError, PricingTable};
