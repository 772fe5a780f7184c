use serde::{Deserialize, Serialize};

use crate::parsing::size::{extract_core_count, extract_cross_section};
use crate::parsing::standard::{standard_code, standard_family};
use crate::parsing::voltage::extract_voltage;
use crate::utils::normalize::normalize;

/// Affinity at or above this value counts as a match; graded attributes
/// below it are reported as gaps while keeping their raw credit.
pub const ACCEPTANCE_THRESHOLD: f64 = 0.8;

/// Size affinity at or above this value is a full match
pub const SIZE_FULL_THRESHOLD: f64 = 0.9;

/// Size affinity at or above this value (but below the full threshold)
/// is a partial match
pub const SIZE_PARTIAL_THRESHOLD: f64 = 0.5;

/// Fraction of the computed size affinity credited for a partial match
pub const SIZE_PARTIAL_FACTOR: f64 = 0.7;

/// Insulation families considered interchangeable spellings of each other
const INSULATION_FAMILIES: [&str; 3] = ["xlpe", "pvc", "lszh"];

/// Per-attribute weights for the composite match score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecWeights {
    /// Weight for voltage rating
    pub voltage: f64,
    /// Weight for conductor material
    pub conductor: f64,
    /// Weight for insulation family
    pub insulation: f64,
    /// Weight for size (core count and cross-section)
    pub size: f64,
    /// Weight for armoring type
    pub armoring: f64,
    /// Weight for standard compliance
    pub standard: f64,
}

impl Default for SpecWeights {
    fn default() -> Self {
        Self {
            voltage: 20.0,    // 20%
            conductor: 15.0,  // 15%
            insulation: 20.0, // 20%
            size: 25.0,       // 25%
            armoring: 10.0,   // 10%
            standard: 10.0,   // 10%
        }
    }
}

/// Affinity between two voltage ratings, graded by numeric distance.
///
/// Exact value → 1.0, within 1 kV → 0.9, within 5 kV → 0.7, otherwise 0.3.
/// Only 1.0 and 0.9 clear the acceptance threshold; the rest is near-miss
/// credit.
#[must_use]
pub fn voltage_affinity(required: &str, offered: &str) -> f64 {
    let required = extract_voltage(required);
    let offered = extract_voltage(offered);

    let diff = (required - offered).abs();
    if diff == 0.0 {
        1.0
    } else if diff <= 1.0 {
        0.9
    } else if diff <= 5.0 {
        0.7
    } else {
        0.3
    }
}

/// Whether two conductor materials are the same after normalization
#[must_use]
pub fn conductor_matches(required: &str, offered: &str) -> bool {
    normalize(required) == normalize(offered)
}

/// Affinity between two insulation descriptions.
///
/// Full credit for normalized equality or for naming the same known family
/// (XLPE/PVC/LSZH) in any spelling; a different family earns 0.4 near-miss
/// credit.
#[must_use]
pub fn insulation_affinity(required: &str, offered: &str) -> f64 {
    let required = normalize(required);
    let offered = normalize(offered);

    if required == offered {
        return 1.0;
    }

    for family in INSULATION_FAMILIES {
        if required.contains(family) && offered.contains(family) {
            return 1.0;
        }
    }

    0.4
}

/// Affinity between two size designations.
///
/// Normalized equality is a full match. Otherwise, matching core counts
/// earn half the score and cross-section closeness the other half: exact
/// 0.5, within 10 sq.mm 0.4, within 50 sq.mm 0.2.
#[must_use]
pub fn size_affinity(required: &str, offered: &str) -> f64 {
    if normalize(required) == normalize(offered) {
        return 1.0;
    }

    let mut score = 0.0;

    // Core count match (50% weight)
    if extract_core_count(required) == extract_core_count(offered) {
        score += 0.5;
    }

    // Cross-section match (50% weight)
    let diff = (extract_cross_section(required) - extract_cross_section(offered)).abs();
    if diff == 0.0 {
        score += 0.5;
    } else if diff <= 10.0 {
        score += 0.4;
    } else if diff <= 50.0 {
        score += 0.2;
    }

    score
}

/// Whether two armoring descriptions are compatible.
///
/// Matches on normalized equality, on both naming SWA or AWA, or on both
/// describing an unarmoured construction.
#[must_use]
pub fn armoring_matches(required: &str, offered: &str) -> bool {
    let required = normalize(required);
    let offered = normalize(offered);

    if required == offered {
        return true;
    }
    if required.contains("swa") && offered.contains("swa") {
        return true;
    }
    if required.contains("awa") && offered.contains("awa") {
        return true;
    }

    is_unarmoured(&required) && is_unarmoured(&offered)
}

fn is_unarmoured(normalized: &str) -> bool {
    normalized.contains("unarmor") || normalized.contains("none")
}

/// Whether two standard designations are compatible.
///
/// Matches on normalized equality, or on the same family prefix (IS/IEC)
/// with the same embedded numeric code.
#[must_use]
pub fn standard_matches(required: &str, offered: &str) -> bool {
    if normalize(required) == normalize(offered) {
        return true;
    }

    match (standard_family(required), standard_family(offered)) {
        (Some(required_family), Some(offered_family)) if required_family == offered_family => {
            let required_code = standard_code(required);
            required_code.is_some() && required_code == standard_code(offered)
        }
        _ => false,
    }
}
