use serde::Serialize;
use tracing::debug;

use crate::core::product::Product;
use crate::core::requirement::RequirementSpec;
use crate::core::types::SpecAttribute;
use crate::matching::scoring::{
    armoring_matches, conductor_matches, insulation_affinity, size_affinity, standard_matches,
    voltage_affinity, SpecWeights, ACCEPTANCE_THRESHOLD, SIZE_FULL_THRESHOLD, SIZE_PARTIAL_FACTOR,
    SIZE_PARTIAL_THRESHOLD,
};

/// Minimum match score for a product to be offered as technically compatible
pub const COMPATIBILITY_THRESHOLD: u8 = 70;

/// Result of matching one product against a tender requirement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecMatchResult {
    /// The scored product
    pub product: Product,

    /// Weighted match percentage, 0-100
    pub match_score: u8,

    /// Labels of attributes that matched (partial size matches are
    /// labelled "Size/Cross-section (Partial)")
    pub matched_specs: Vec<String>,

    /// Labels of attributes that did not match
    pub unmatched_specs: Vec<String>,

    /// Human-readable reasons the product fits
    pub strengths: Vec<String>,

    /// Human-readable mismatches, naming both the required and offered value
    pub gaps: Vec<String>,
}

impl SpecMatchResult {
    /// Whether the product clears the compatibility threshold
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.match_score >= COMPATIBILITY_THRESHOLD
    }
}

/// Running tally over the attributes present on both sides
#[derive(Debug, Default)]
struct ScoreTally {
    awarded: f64,
    achievable: f64,
}

impl ScoreTally {
    /// Final integer percentage; 0 when no attribute was comparable
    fn percentage(&self) -> u8 {
        if self.achievable > 0.0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                (100.0 * self.awarded / self.achievable).round() as u8
            }
        } else {
            0
        }
    }
}

/// The specification matching engine.
///
/// Stateless apart from its weights; construct one per call site rather
/// than sharing a global instance.
#[derive(Debug, Clone, Default)]
pub struct SpecMatcher {
    weights: SpecWeights,
}

impl SpecMatcher {
    /// Create a matcher with the default attribute weights
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with custom attribute weights
    #[must_use]
    pub fn with_weights(weights: SpecWeights) -> Self {
        Self { weights }
    }

    /// Score a single product against a tender requirement.
    ///
    /// Total over all inputs: attributes absent from either side are
    /// skipped, and a requirement with no comparable attributes scores 0
    /// with empty matched/unmatched lists.
    #[must_use]
    pub fn match_product(&self, requirement: &RequirementSpec, product: &Product) -> SpecMatchResult {
        let mut tally = ScoreTally::default();
        let mut matched = Vec::new();
        let mut unmatched = Vec::new();
        let mut strengths = Vec::new();
        let mut gaps = Vec::new();

        let specs = &product.specifications;

        // Voltage: graded affinity, near-misses keep their credit
        if let (Some(required), Some(offered)) =
            (requirement.voltage.as_deref(), specs.voltage.as_deref())
        {
            tally.achievable += self.weights.voltage;
            let affinity = voltage_affinity(required, offered);
            tally.awarded += self.weights.voltage * affinity;

            if affinity >= ACCEPTANCE_THRESHOLD {
                matched.push(SpecAttribute::Voltage.to_string());
                strengths.push(format!("Voltage rating {offered} meets the {required} requirement"));
            } else {
                unmatched.push(SpecAttribute::Voltage.to_string());
                gaps.push(format!("Voltage {offered} may not satisfy the required {required}"));
            }
        }

        // Conductor: binary
        if let (Some(required), Some(offered)) =
            (requirement.conductor.as_deref(), specs.conductor.as_deref())
        {
            tally.achievable += self.weights.conductor;
            if conductor_matches(required, offered) {
                tally.awarded += self.weights.conductor;
                matched.push(SpecAttribute::Conductor.to_string());
                strengths.push(format!("{offered} conductor as required"));
            } else {
                unmatched.push(SpecAttribute::Conductor.to_string());
                gaps.push(format!(
                    "Requires {required} conductor, product offers {offered}"
                ));
            }
        }

        // Insulation: family-aware, near-misses keep their credit
        if let (Some(required), Some(offered)) =
            (requirement.insulation.as_deref(), specs.insulation.as_deref())
        {
            tally.achievable += self.weights.insulation;
            let affinity = insulation_affinity(required, offered);
            tally.awarded += self.weights.insulation * affinity;

            if affinity >= ACCEPTANCE_THRESHOLD {
                matched.push(SpecAttribute::Insulation.to_string());
                strengths.push(format!("Insulation type {offered} matches the requirement"));
            } else {
                unmatched.push(SpecAttribute::Insulation.to_string());
                gaps.push(format!(
                    "Insulation mismatch: requires {required}, product has {offered}"
                ));
            }
        }

        // Size: full, partial (at reduced credit), or unmatched
        if let (Some(required), Some(offered)) = (requirement.size.as_deref(), specs.size.as_deref())
        {
            tally.achievable += self.weights.size;
            let affinity = size_affinity(required, offered);

            if affinity >= SIZE_FULL_THRESHOLD {
                tally.awarded += self.weights.size * affinity;
                matched.push(SpecAttribute::Size.to_string());
                strengths.push(format!("Size {offered} matches the specification"));
            } else if affinity >= SIZE_PARTIAL_THRESHOLD {
                tally.awarded += self.weights.size * affinity * SIZE_PARTIAL_FACTOR;
                matched.push(format!("{} (Partial)", SpecAttribute::Size));
                gaps.push(format!(
                    "Size {offered} approximately matches the required {required}"
                ));
            } else {
                unmatched.push(SpecAttribute::Size.to_string());
                gaps.push(format!(
                    "Size mismatch: requires {required}, product offers {offered}"
                ));
            }
        }

        // Armoring: binary
        if let (Some(required), Some(offered)) =
            (requirement.armoring.as_deref(), specs.armoring.as_deref())
        {
            tally.achievable += self.weights.armoring;
            if armoring_matches(required, offered) {
                tally.awarded += self.weights.armoring;
                matched.push(SpecAttribute::Armoring.to_string());
                strengths.push(format!("Armoring type {offered} as specified"));
            } else {
                unmatched.push(SpecAttribute::Armoring.to_string());
                gaps.push(format!(
                    "Armoring type differs: requires {required}, product has {offered}"
                ));
            }
        }

        // Standard: binary
        if let (Some(required), Some(offered)) =
            (requirement.standard.as_deref(), specs.standard.as_deref())
        {
            tally.achievable += self.weights.standard;
            if standard_matches(required, offered) {
                tally.awarded += self.weights.standard;
                matched.push(SpecAttribute::Standard.to_string());
                strengths.push(format!("Compliant with {offered}"));
            } else {
                unmatched.push(SpecAttribute::Standard.to_string());
                gaps.push(format!(
                    "Standard mismatch: requires {required}, product certifies {offered}"
                ));
            }
        }

        SpecMatchResult {
            product: product.clone(),
            match_score: tally.percentage(),
            matched_specs: matched,
            unmatched_specs: unmatched,
            strengths,
            gaps,
        }
    }

    /// Rank a candidate list and return the best matches.
    ///
    /// Sorted by descending match score; the sort is stable, so ties are
    /// broken by catalog order (first-listed wins). Returns at most
    /// `top_n` results and an empty list for an empty candidate list.
    #[must_use]
    pub fn find_top_matches(
        &self,
        requirement: &RequirementSpec,
        products: &[Product],
        top_n: usize,
    ) -> Vec<SpecMatchResult> {
        let mut results: Vec<SpecMatchResult> = products
            .iter()
            .map(|product| self.match_product(requirement, product))
            .collect();

        results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        results.truncate(top_n);

        debug!(
            candidates = products.len(),
            returned = results.len(),
            best = results.first().map_or(0, |r| r.match_score),
            "ranked products for requirement"
        );

        results
    }
}
