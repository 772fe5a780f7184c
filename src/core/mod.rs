//! Core data types for tender/product matching.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Product`]: A catalog product with its technical specification sheet
//! - [`ProductSpecification`]: The six comparable attributes of a product
//! - [`RequirementSpec`]: The same attributes as extracted from a tender
//! - [`TenderRequest`]: The full hand-over record from the extraction layer
//! - [`Sku`], [`SpecAttribute`]: Identifier and label types
//!
//! ## Attribute Spellings
//!
//! Requirement and catalog values are free text and rarely agree on
//! spelling:
//!
//! | Attribute | Tender | Catalog |
//! |-----------|--------|---------|
//! | Voltage   | 11 kV  | 11kV    |
//! | Size      | 3Cx185 | 3C x 185 sq.mm |
//! | Standard  | IS7098 | IS 7098 |
//!
//! Matching never compares raw strings directly; see [`crate::parsing`] and
//! [`crate::utils::normalize`].
//!
//! [`Product`]: product::Product
//! [`ProductSpecification`]: product::ProductSpecification
//! [`RequirementSpec`]: requirement::RequirementSpec
//! [`TenderRequest`]: requirement::TenderRequest
//! [`Sku`]: types::Sku
//! [`SpecAttribute`]: types::SpecAttribute

pub mod product;
pub mod requirement;
pub mod types;
