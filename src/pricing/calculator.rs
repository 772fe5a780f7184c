use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::types::Sku;
use crate::pricing::data::{PricingError, PricingTable};

/// Quantity discount tiers, highest threshold first: (minimum quantity,
/// price factor). Tiers are mutually exclusive.
const DISCOUNT_TIERS: [(u32, f64); 3] = [
    (10_000, 0.85), // 15% discount
    (5_000, 0.90),  // 10% discount
    (2_000, 0.95),  // 5% discount
];

/// Default test costs keyed by recognizable substrings of the test name
const DEFAULT_TEST_COSTS: [(&str, f64); 6] = [
    ("routine", 25_000.0),
    ("type", 150_000.0),
    ("sample", 50_000.0),
    ("high voltage", 75_000.0),
    ("partial discharge", 80_000.0),
    ("fire", 100_000.0),
];

/// Flat default when a test name matches nothing at all
const FALLBACK_TEST_COST: f64 = 50_000.0;

/// Default service costs keyed by recognizable substrings of the service name
const DEFAULT_SERVICE_COSTS: [(&str, f64); 4] = [
    ("delivery", 15_000.0),
    ("installation", 50_000.0),
    ("commissioning", 75_000.0),
    ("documentation", 10_000.0),
];

/// Flat default when a service name matches nothing at all
const FALLBACK_SERVICE_COST: f64 = 20_000.0;

/// Itemized cost for one requested test
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCost {
    pub test_name: String,
    pub cost: f64,
}

/// Itemized cost for one requested service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCost {
    pub service_name: String,
    pub cost: f64,
}

/// Complete cost roll-up for one proposed response.
///
/// `total` equals `subtotal`: margin/markup is a separate pricing-strategy
/// step (see [`crate::pricing::strategy`]), never applied here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceCalculation {
    pub sku: Sku,
    pub quantity: u32,

    /// Effective per-unit price after the quantity discount
    pub unit_price: f64,

    /// `unit_price * quantity`
    pub material_cost: f64,

    pub test_costs: Vec<TestCost>,
    pub total_test_cost: f64,

    pub service_costs: Vec<ServiceCost>,
    pub total_service_cost: f64,

    pub subtotal: f64,
    pub total: f64,
}

/// The pricing calculation engine
pub struct PricingCalculator<'a> {
    table: &'a PricingTable,
}

impl<'a> PricingCalculator<'a> {
    /// Create a calculator over a pricing table
    #[must_use]
    pub fn new(table: &'a PricingTable) -> Self {
        Self { table }
    }

    /// Calculate the full cost roll-up for a SKU.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::NotFound`] when the SKU has no pricing
    /// entry. No partial computation is performed in that case; the caller
    /// must handle the gap rather than quote from nothing.
    pub fn calculate_price(
        &self,
        sku: &str,
        quantity: u32,
        tests_required: &[String],
        services_required: &[String],
    ) -> Result<PriceCalculation, PricingError> {
        let pricing = self
            .table
            .get(sku)
            .ok_or_else(|| PricingError::NotFound(sku.to_string()))?;

        // Base unit price with quantity discount applied
        let unit_price = apply_quantity_discount(pricing.base_price, quantity);
        let material_cost = unit_price * f64::from(quantity);

        // Itemized test costs
        let test_costs: Vec<TestCost> = tests_required
            .iter()
            .map(|test_name| TestCost {
                test_name: test_name.clone(),
                cost: resolve_cost(
                    test_name,
                    &pricing.test_costs,
                    &DEFAULT_TEST_COSTS,
                    FALLBACK_TEST_COST,
                ),
            })
            .collect();
        let total_test_cost: f64 = test_costs.iter().map(|t| t.cost).sum();

        // Itemized service costs
        let service_costs: Vec<ServiceCost> = services_required
            .iter()
            .map(|service_name| ServiceCost {
                service_name: service_name.clone(),
                cost: resolve_cost(
                    service_name,
                    &pricing.service_costs,
                    &DEFAULT_SERVICE_COSTS,
                    FALLBACK_SERVICE_COST,
                ),
            })
            .collect();
        let total_service_cost: f64 = service_costs.iter().map(|s| s.cost).sum();

        let subtotal = material_cost + total_test_cost + total_service_cost;
        let total = subtotal;

        Ok(PriceCalculation {
            sku: pricing.sku.clone(),
            quantity,
            unit_price,
            material_cost,
            test_costs,
            total_test_cost,
            service_costs,
            total_service_cost,
            subtotal,
            total,
        })
    }
}

/// Apply the quantity discount tier to a unit price
fn apply_quantity_discount(unit_price: f64, quantity: u32) -> f64 {
    for (threshold, factor) in DISCOUNT_TIERS {
        if quantity >= threshold {
            return unit_price * factor;
        }
    }
    unit_price
}

/// Resolve a requested test/service name to a cost.
///
/// Resolution order is load-bearing:
/// 1. exact key in the SKU's cost map,
/// 2. case-insensitive substring match against the map keys (either
///    direction),
/// 3. keyword default table,
/// 4. flat fallback.
///
/// Every requested name resolves to *some* cost; a quote never silently
/// drops a line item.
fn resolve_cost(
    requested: &str,
    costs: &BTreeMap<String, f64>,
    defaults: &[(&str, f64)],
    fallback: f64,
) -> f64 {
    // Tier 1: exact key match
    if let Some(&cost) = costs.get(requested) {
        return cost;
    }

    // Tier 2: substring match in either direction
    let needle = requested.to_lowercase();
    for (key, &cost) in costs {
        let key = key.to_lowercase();
        if key.contains(&needle) || needle.contains(&key) {
            return cost;
        }
    }

    // Tier 3: keyword defaults
    for (keyword, cost) in defaults {
        if needle.contains(keyword) {
            return *cost;
        }
    }

    // Tier 4: flat fallback
    fallback
}
