use serde::{Deserialize, Serialize};

/// Unique stock-keeping unit identifying a product in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sku(pub String);

impl Sku {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Sku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The six comparable specification attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecAttribute {
    Voltage,
    Conductor,
    Insulation,
    Size,
    Armoring,
    Standard,
}

impl std::fmt::Display for SpecAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Voltage => write!(f, "Voltage"),
            Self::Conductor => write!(f, "Conductor"),
            Self::Insulation => write!(f, "Insulation"),
            Self::Size => write!(f, "Size/Cross-section"),
            Self::Armoring => write!(f, "Armoring"),
            Self::Standard => write!(f, "Standard"),
        }
    }
}
