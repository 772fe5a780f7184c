use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::core::product::Product;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub products: Vec<Product>,
}

/// The product catalog with a SKU index
#[derive(Debug)]
pub struct ProductCatalog {
    /// All sellable products
    pub products: Vec<Product>,

    /// Index: SKU -> index in products vec
    sku_to_index: HashMap<String, usize>,
}

impl ProductCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            sku_to_index: HashMap::new(),
        }
    }

    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if the embedded JSON is invalid
    /// (validated at build time, so this only fails on a corrupted build).
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time; validated by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/cable_products.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the file cannot be read, or
    /// `CatalogError::ParseError` if it is not a valid catalog document.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if the JSON does not match the
    /// catalog document shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            eprintln!(
                "Warning: Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION, data.version
            );
        }

        let mut catalog = Self::new();
        for product in data.products {
            catalog.add_product(product);
        }

        debug!(products = catalog.len(), "loaded product catalog");
        Ok(catalog)
    }

    /// Add a product to the catalog
    pub fn add_product(&mut self, product: Product) {
        let index = self.products.len();
        self.sku_to_index.insert(product.sku.0.clone(), index);
        self.products.push(product);
    }

    /// Get a product by SKU
    #[must_use]
    pub fn get(&self, sku: &str) -> Option<&Product> {
        self.sku_to_index.get(sku).map(|&idx| &self.products[idx])
    }

    /// Products currently marked available
    #[must_use]
    pub fn available_products(&self) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.available)
            .cloned()
            .collect()
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            products: self.products.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of products in catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::product::ProductSpecification;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = ProductCatalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_catalog_get_by_sku() {
        let catalog = ProductCatalog::load_embedded().unwrap();

        let product = catalog.get("MV-XL-3C185");
        assert!(product.is_some());
        let product = product.unwrap();
        assert_eq!(product.category, "Medium Voltage Cables");
        assert_eq!(product.specifications.voltage.as_deref(), Some("11kV"));
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = ProductCatalog::load_embedded().unwrap();
        assert!(catalog.get("NO-SUCH-SKU").is_none());
    }

    #[test]
    fn test_available_products_filtered() {
        let catalog = ProductCatalog::load_embedded().unwrap();
        let available = catalog.available_products();

        assert!(available.len() < catalog.len());
        assert!(available.iter().all(|p| p.available));
    }

    #[test]
    fn test_catalog_to_json() {
        let catalog = ProductCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"products\""));
        assert!(json.contains("MV-XL-3C185"));
    }

    #[test]
    fn test_add_product() {
        let mut catalog = ProductCatalog::new();
        assert_eq!(catalog.len(), 0);

        let product = Product::new("TEST-SKU", "Test Cable", "Test Category")
            .with_specifications(ProductSpecification::new().with_voltage("11kV"))
            .with_price_per_meter(100.0);

        catalog.add_product(product);
        assert_eq!(catalog.len(), 1);

        let retrieved = catalog.get("TEST-SKU");
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().name, "Test Cable");
    }

    #[test]
    fn test_from_json_roundtrip() {
        let catalog = ProductCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        let reparsed = ProductCatalog::from_json(&json).unwrap();
        assert_eq!(reparsed.len(), catalog.len());
        assert_eq!(
            reparsed.get("MV-XL-3C185").map(|p| &p.name),
            catalog.get("MV-XL-3C185").map(|p| &p.name)
        );
    }
}
