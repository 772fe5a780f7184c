use serde::{Deserialize, Serialize};

use crate::core::types::Sku;

/// Technical specification sheet of a catalog product.
///
/// All fields are free-text as printed in the OEM datasheet; comparisons go
/// through the parsers in [`crate::parsing`]. A missing field means the
/// datasheet does not state that attribute, and the attribute is skipped
/// during matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSpecification {
    /// Rated voltage, e.g. "11kV"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage: Option<String>,

    /// Size designation: core count and cross-section, e.g. "3C x 185 sq.mm"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Conductor material, e.g. "Aluminium", "Copper"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conductor: Option<String>,

    /// Insulation family, e.g. "XLPE", "PVC", "LSZH"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insulation: Option<String>,

    /// Armoring type, or "Unarmoured"/"None"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armoring: Option<String>,

    /// Standard designation with family prefix and number, e.g. "IS 7098"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
}

impl ProductSpecification {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_voltage(mut self, voltage: impl Into<String>) -> Self {
        self.voltage = Some(voltage.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    #[must_use]
    pub fn with_conductor(mut self, conductor: impl Into<String>) -> Self {
        self.conductor = Some(conductor.into());
        self
    }

    #[must_use]
    pub fn with_insulation(mut self, insulation: impl Into<String>) -> Self {
        self.insulation = Some(insulation.into());
        self
    }

    #[must_use]
    pub fn with_armoring(mut self, armoring: impl Into<String>) -> Self {
        self.armoring = Some(armoring.into());
        self
    }

    #[must_use]
    pub fn with_standard(mut self, standard: impl Into<String>) -> Self {
        self.standard = Some(standard.into());
        self
    }
}

/// A product in the OEM catalog.
///
/// Immutable reference data: loaded once from the catalog at startup and
/// never mutated by the matching engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique stock-keeping unit
    pub sku: Sku,

    /// Human-readable product name
    pub name: String,

    /// Product family, e.g. "Medium Voltage Cables"
    pub category: String,

    /// Technical specification sheet
    pub specifications: ProductSpecification,

    /// Certifications held for this product
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,

    /// List price per meter
    pub price_per_meter: f64,

    /// Whether the product can currently be offered
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Product {
    pub fn new(sku: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            sku: Sku::new(sku),
            name: name.into(),
            category: category.into(),
            specifications: ProductSpecification::default(),
            certifications: Vec::new(),
            price_per_meter: 0.0,
            available: true,
        }
    }

    #[must_use]
    pub fn with_specifications(mut self, specifications: ProductSpecification) -> Self {
        self.specifications = specifications;
        self
    }

    #[must_use]
    pub fn with_certifications(mut self, certifications: Vec<String>) -> Self {
        self.certifications = certifications;
        self
    }

    #[must_use]
    pub fn with_price_per_meter(mut self, price: f64) -> Self {
        self.price_per_meter = price;
        self
    }

    #[must_use]
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }
}
