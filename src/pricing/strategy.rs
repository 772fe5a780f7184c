//! Margin, scenario and market-estimate helpers for the pricing-strategy
//! stage.
//!
//! These are the pure calculations layered on top of the cost roll-up:
//! solving selling prices for target margins, estimating the competitive
//! band for a product category, and classifying the commercial risk of a
//! quote. Markup lives here, never inside the calculator.

use serde::{Deserialize, Serialize};

/// Margin as a percentage of the selling price.
///
/// Returns 0 for a zero selling price rather than dividing by zero; an
/// unpriced quote has no meaningful margin.
#[must_use]
pub fn margin_percent(total_cost: f64, selling_price: f64) -> f64 {
    if selling_price == 0.0 {
        return 0.0;
    }
    (selling_price - total_cost) / selling_price * 100.0
}

/// Target margins (percent) for the four pricing scenarios
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetMargins {
    /// Aggressive scenario margin
    pub low: f64,
    /// Recommended scenario margin
    pub medium: f64,
    /// Premium scenario margin
    pub high: f64,
    /// Optimal scenario margin
    pub optimal: f64,
}

impl Default for TargetMargins {
    fn default() -> Self {
        Self {
            low: 8.0,
            medium: 15.0,
            high: 22.0,
            optimal: 18.0,
        }
    }
}

/// Selling prices for the four pricing scenarios
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingScenarios {
    pub aggressive: f64,
    pub recommended: f64,
    pub premium: f64,
    pub optimal: f64,
}

/// Selling price that yields `margin` percent on `base_cost`
fn price_for_margin(base_cost: f64, margin: f64) -> f64 {
    base_cost / (1.0 - margin / 100.0)
}

/// Compute the selling price for each pricing scenario.
///
/// Each price solves `margin_percent(base_cost, price) == margin` for its
/// target margin.
#[must_use]
pub fn scenario_prices(base_cost: f64, targets: &TargetMargins) -> PricingScenarios {
    PricingScenarios {
        aggressive: price_for_margin(base_cost, targets.low),
        recommended: price_for_margin(base_cost, targets.medium),
        premium: price_for_margin(base_cost, targets.high),
        optimal: price_for_margin(base_cost, targets.optimal),
    }
}

/// Estimated per-unit market price band for a product category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketEstimate {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

/// Estimate the per-unit market price band for a product category.
///
/// Coarse lookup by category substring; unmatched categories get the
/// generic band. A proper estimate would draw on historical bid data,
/// which is not available to this core.
#[must_use]
pub fn estimate_market_price(category: &str) -> MarketEstimate {
    let (min, max) = if category.contains("High Voltage") {
        (3000.0, 5000.0)
    } else if category.contains("Medium Voltage") {
        (1000.0, 2500.0)
    } else if category.contains("Fire Survival") {
        (350.0, 600.0)
    } else if category.contains("Aerial") {
        (400.0, 700.0)
    } else {
        (500.0, 2000.0)
    };

    MarketEstimate {
        min,
        max,
        average: (min + max) / 2.0,
    }
}

/// Position of a quote relative to the estimated market average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketPosition {
    Discount,
    Competitive,
    Premium,
}

impl std::fmt::Display for MarketPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discount => write!(f, "discount"),
            Self::Competitive => write!(f, "competitive"),
            Self::Premium => write!(f, "premium"),
        }
    }
}

/// Classify a quote against the estimated market average: at or below 95%
/// is a discount position, at or above 110% is premium.
#[must_use]
pub fn market_position(our_price: f64, average_market_price: f64) -> MarketPosition {
    if our_price <= average_market_price * 0.95 {
        MarketPosition::Discount
    } else if our_price >= average_market_price * 1.10 {
        MarketPosition::Premium
    } else {
        MarketPosition::Competitive
    }
}

/// Commercial risk level of a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Assess the commercial risk of a quote.
///
/// Risk points accumulate for a weak technical match (< 80 → 2 points,
/// < 90 → 1), a thin margin (< 10% → 2, < 15% → 1), and a price exceeding
/// the tender's estimated value (> 20% over → 2, > 10% over → 1; skipped
/// when no estimate was given). 4+ points is high risk, 2+ medium.
#[must_use]
pub fn assess_risk(
    match_score: u8,
    margin: f64,
    estimated_value: f64,
    our_price: f64,
) -> RiskLevel {
    let mut risk = 0u32;

    if match_score < 80 {
        risk += 2;
    } else if match_score < 90 {
        risk += 1;
    }

    if margin < 10.0 {
        risk += 2;
    } else if margin < 15.0 {
        risk += 1;
    }

    if estimated_value > 0.0 {
        let over = (our_price - estimated_value) / estimated_value * 100.0;
        if over > 20.0 {
            risk += 2;
        } else if over > 10.0 {
            risk += 1;
        }
    }

    if risk >= 4 {
        RiskLevel::High
    } else if risk >= 2 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_percent() {
        assert_eq!(margin_percent(85.0, 100.0), 15.0);
        assert_eq!(margin_percent(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_margin_percent_zero_selling_price() {
        // Total over its domain: no division-by-zero panic
        assert_eq!(margin_percent(0.0, 0.0), 0.0);
        assert_eq!(margin_percent(5000.0, 0.0), 0.0);
    }

    #[test]
    fn test_scenario_prices_solve_for_margin() {
        let scenarios = scenario_prices(
            85.0,
            &TargetMargins {
                low: 15.0,
                medium: 15.0,
                high: 15.0,
                optimal: 15.0,
            },
        );

        // 85 / (1 - 0.15) = 100
        assert!((scenarios.aggressive - 100.0).abs() < 1e-9);

        // The margin on the solved price is the target margin
        let margin = margin_percent(85.0, scenarios.recommended);
        assert!((margin - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_scenario_prices_ordering() {
        let scenarios = scenario_prices(100_000.0, &TargetMargins::default());

        assert!(scenarios.aggressive < scenarios.recommended);
        assert!(scenarios.recommended < scenarios.optimal);
        assert!(scenarios.optimal < scenarios.premium);
    }

    #[test]
    fn test_estimate_market_price_bands() {
        let high = estimate_market_price("High Voltage Cables");
        assert_eq!((high.min, high.max), (3000.0, 5000.0));
        assert_eq!(high.average, 4000.0);

        let medium = estimate_market_price("Medium Voltage Cables");
        assert_eq!((medium.min, medium.max), (1000.0, 2500.0));

        let fire = estimate_market_price("Fire Survival Cables");
        assert_eq!((fire.min, fire.max), (350.0, 600.0));

        let aerial = estimate_market_price("Aerial Bunched Cables");
        assert_eq!((aerial.min, aerial.max), (400.0, 700.0));

        let generic = estimate_market_price("Instrumentation Cables");
        assert_eq!((generic.min, generic.max), (500.0, 2000.0));
    }

    #[test]
    fn test_market_position_bands() {
        assert_eq!(market_position(90.0, 100.0), MarketPosition::Discount);
        assert_eq!(market_position(95.0, 100.0), MarketPosition::Discount);
        assert_eq!(market_position(100.0, 100.0), MarketPosition::Competitive);
        assert_eq!(market_position(110.0, 100.0), MarketPosition::Premium);
        assert_eq!(market_position(120.0, 100.0), MarketPosition::Premium);
    }

    #[test]
    fn test_assess_risk_low() {
        // Strong match, healthy margin, priced under the estimate
        assert_eq!(assess_risk(95, 18.0, 1_000_000.0, 900_000.0), RiskLevel::Low);
    }

    #[test]
    fn test_assess_risk_medium() {
        // Slightly weak match and slightly thin margin
        assert_eq!(assess_risk(85, 12.0, 0.0, 900_000.0), RiskLevel::Medium);
    }

    #[test]
    fn test_assess_risk_high() {
        // Weak match and thin margin
        assert_eq!(assess_risk(70, 8.0, 0.0, 900_000.0), RiskLevel::High);

        // Weak match plus a price far over the estimate
        assert_eq!(
            assess_risk(75, 20.0, 1_000_000.0, 1_300_000.0),
            RiskLevel::High
        );
    }

    #[test]
    fn test_assess_risk_no_estimate_skips_price_check() {
        // Without an estimated value the price overage cannot be judged
        assert_eq!(assess_risk(95, 20.0, 0.0, 99_000_000.0), RiskLevel::Low);
    }
}
