use serde::{Deserialize, Serialize};

/// Technical requirements extracted from a tender document.
///
/// The query-side twin of [`ProductSpecification`]: the same six optional
/// attributes, but populated by the (out-of-scope) extraction layer rather
/// than an OEM datasheet. Any field may be absent; an absent attribute
/// contributes nothing to either side of the match score.
///
/// [`ProductSpecification`]: crate::core::product::ProductSpecification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conductor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insulation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armoring: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
}

impl RequirementSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no attribute is set at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.voltage.is_none()
            && self.size.is_none()
            && self.conductor.is_none()
            && self.insulation.is_none()
            && self.armoring.is_none()
            && self.standard.is_none()
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

/// The full hand-over record from the extraction layer for one tender.
///
/// Only `specifications` is interpreted by the matching engine; quantity,
/// testing and certification lists are carried through for the pricing and
/// response-generation stages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TenderRequest {
    /// Tender identifier assigned by the scanning layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rfp_id: Option<String>,

    /// Extracted technical requirements
    #[serde(default)]
    pub specifications: RequirementSpec,

    /// Required quantity in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    /// Free-text names of required tests
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testing_required: Vec<String>,

    /// Free-text names of required certifications
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_builder() {
        let spec = RequirementSpec::new()
            .with_voltage("11kV")
            .with_insulation("XLPE");

        assert_eq!(spec.voltage.as_deref(), Some("11kV"));
        assert!(spec.size.is_none());
        assert!(!spec.is_empty());
    }

    #[test]
    fn test_requirement_empty() {
        assert!(RequirementSpec::new().is_empty());
    }

    #[test]
    fn test_tender_request_deserialize() {
        let request: TenderRequest = serde_json::from_str(
            r#"{
                "rfp_id": "RFP-2026-014",
                "specifications": {
                    "voltage": "11kV",
                    "size": "3C x 185 sq.mm"
                },
                "quantity": 5000,
                "testing_required": ["Routine Test", "Type Test"]
            }"#,
        )
        .unwrap();

        assert_eq!(request.rfp_id.as_deref(), Some("RFP-2026-014"));
        assert_eq!(request.quantity, Some(5000));
        assert_eq!(request.testing_required.len(), 2);
        assert!(request.certifications.is_empty());
        assert_eq!(request.specifications.voltage.as_deref(), Some("11kV"));
    }

    #[test]
    fn test_tender_request_minimal() {
        let request: TenderRequest = serde_json::from_str("{}").unwrap();
        assert!(request.specifications.is_empty());
        assert!(request.quantity.is_none());
    }
}
