use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::core::types::Sku;

#[derive(Error, Debug)]
pub enum PricingError {
    /// No pricing entry exists for the requested SKU. Recoverable: the
    /// caller decides whether to fall back to a market estimate or surface
    /// the gap to the user.
    #[error("Pricing data not found for SKU: {0}")]
    NotFound(String),

    #[error("Failed to read pricing data: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse pricing data: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Pricing table version for compatibility checking
pub const PRICING_VERSION: &str = "1.0.0";

/// Pricing reference data for one SKU.
///
/// Cost maps are `BTreeMap`s so that the substring fallback in the
/// calculator iterates in a stable order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingData {
    /// SKU this entry prices
    pub sku: Sku,

    /// Per-unit list price before quantity discounts
    pub base_price: f64,

    /// Cost per named test
    #[serde(default)]
    pub test_costs: BTreeMap<String, f64>,

    /// Cost per named service
    #[serde(default)]
    pub service_costs: BTreeMap<String, f64>,
}

/// Serializable pricing table format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingTableData {
    pub version: String,
    pub created_at: String,
    pub entries: Vec<PricingData>,
}

/// The SKU-keyed pricing table
#[derive(Debug)]
pub struct PricingTable {
    /// All pricing entries
    pub entries: Vec<PricingData>,

    /// Index: SKU -> index in entries vec
    sku_to_index: HashMap<String, usize>,
}

impl PricingTable {
    /// Create an empty pricing table
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            sku_to_index: HashMap::new(),
        }
    }

    /// Load the embedded default pricing table
    ///
    /// # Errors
    ///
    /// Returns `PricingError::ParseError` if the embedded JSON is invalid
    /// (validated at build time, so this only fails on a corrupted build).
    pub fn load_embedded() -> Result<Self, PricingError> {
        // Embedded at compile time; validated by build.rs
        const EMBEDDED_PRICING: &str = include_str!("../../catalogs/pricing.json");
        Self::from_json(EMBEDDED_PRICING)
    }

    /// Load a pricing table from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `PricingError::ReadError` if the file cannot be read, or
    /// `PricingError::ParseError` if it is not a valid pricing document.
    pub fn load_from_file(path: &Path) -> Result<Self, PricingError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a pricing table from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `PricingError::ParseError` if the JSON does not match the
    /// pricing document shape.
    pub fn from_json(json: &str) -> Result<Self, PricingError> {
        let data: PricingTableData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != PRICING_VERSION {
            eprintln!(
                "Warning: Pricing table version mismatch (expected {}, found {})",
                PRICING_VERSION, data.version
            );
        }

        let mut table = Self::new();
        for entry in data.entries {
            table.add_entry(entry);
        }

        debug!(entries = table.len(), "loaded pricing table");
        Ok(table)
    }

    /// Add a pricing entry to the table
    pub fn add_entry(&mut self, entry: PricingData) {
        let index = self.entries.len();
        self.sku_to_index.insert(entry.sku.0.clone(), index);
        self.entries.push(entry);
    }

    /// Get the pricing entry for a SKU
    #[must_use]
    pub fn get(&self, sku: &str) -> Option<&PricingData> {
        self.sku_to_index.get(sku).map(|&idx| &self.entries[idx])
    }

    /// Export the pricing table to JSON
    ///
    /// # Errors
    ///
    /// Returns `PricingError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, PricingError> {
        let data = PricingTableData {
            version: PRICING_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            entries: self.entries.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::new()
    }
}
