//! Pricing calculation engine.
//!
//! This module provides the deterministic cost roll-up for a proposed
//! tender response:
//!
//! - [`PricingTable`]: SKU-keyed pricing reference data (base prices,
//!   test/service cost maps), embedded or loaded from JSON
//! - [`PricingCalculator`]: quantity-discounted material cost plus
//!   itemized test and service costs
//! - [`strategy`]: margin, scenario, market-estimate and risk helpers used
//!   by the pricing-strategy stage
//!
//! ## Example
//!
//! ```rust,no_run
//! use rfp_solver::{PricingCalculator, PricingTable};
//!
//! let table = PricingTable::load_embedded().unwrap();
//! let calculator = PricingCalculator::new(&table);
//!
//! let calculation = calculator
//!     .calculate_price(
//!         "MV-XL-3C185",
//!         5000,
//!         &["Routine Test".to_string()],
//!         &["Delivery".to_string()],
//!     )
//!     .unwrap();
//!
//! println!("total: {}", calculation.total);
//! ```
//!
//! The only failure in this module is [`PricingError::NotFound`] for a SKU
//! with no pricing entry; callers must handle it (e.g. by falling back to a
//! market estimate) rather than treating it as fatal.
//!
//! [`PricingTable`]: data::PricingTable
//! [`PricingCalculator`]: calculator::PricingCalculator
//! [`PricingError::NotFound`]: data::PricingError::NotFound

pub mod calculator;
pub mod data;
pub mod strategy;
