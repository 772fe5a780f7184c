//! Integration tests for the pricing calculator over the embedded table.

use rfp_solver::pricing::strategy::{
    estimate_market_price, margin_percent, market_position, scenario_prices, MarketPosition,
    TargetMargins,
};
use rfp_solver::{PricingCalculator, PricingError, PricingTable};

#[test]
fn test_full_quote_against_embedded_table() {
    let table = PricingTable::load_embedded().unwrap();
    let calculator = PricingCalculator::new(&table);

    let calculation = calculator
        .calculate_price(
            "MV-XL-3C185",
            5000,
            &["Routine Test".to_string(), "Type Test".to_string()],
            &["Delivery".to_string(), "Documentation".to_string()],
        )
        .unwrap();

    // 10% discount tier applies at 5000 meters
    assert_eq!(calculation.unit_price, 1450.0 * 0.90);
    assert_eq!(calculation.material_cost, 1450.0 * 0.90 * 5000.0);

    assert_eq!(calculation.total_test_cost, 25_000.0 + 150_000.0);
    assert_eq!(calculation.total_service_cost, 15_000.0 + 10_000.0);

    assert_eq!(
        calculation.subtotal,
        calculation.material_cost + calculation.total_test_cost + calculation.total_service_cost
    );
    assert_eq!(calculation.total, calculation.subtotal);
}

#[test]
fn test_discount_boundaries_on_embedded_data() {
    let table = PricingTable::load_embedded().unwrap();
    let calculator = PricingCalculator::new(&table);

    let no_discount = calculator
        .calculate_price("MV-XL-3C185", 1999, &[], &[])
        .unwrap();
    assert_eq!(no_discount.unit_price, 1450.0);

    let five_percent = calculator
        .calculate_price("MV-XL-3C185", 2000, &[], &[])
        .unwrap();
    assert_eq!(five_percent.unit_price, 1450.0 * 0.95);

    let fifteen_percent = calculator
        .calculate_price("MV-XL-3C185", 10_000, &[], &[])
        .unwrap();
    assert_eq!(fifteen_percent.unit_price, 1450.0 * 0.85);
}

#[test]
fn test_unknown_sku_raises_not_found() {
    let table = PricingTable::load_embedded().unwrap();
    let calculator = PricingCalculator::new(&table);

    let result = calculator.calculate_price("UNKNOWN-SKU", 100, &[], &[]);
    match result {
        Err(PricingError::NotFound(sku)) => assert_eq!(sku, "UNKNOWN-SKU"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_fire_test_falls_back_to_keyword_default() {
    let table = PricingTable::load_embedded().unwrap();
    let calculator = PricingCalculator::new(&table);

    // MV-XL-3C185 has no fire test entry; the keyword default applies
    let calculation = calculator
        .calculate_price("MV-XL-3C185", 100, &["Fire Test".to_string()], &[])
        .unwrap();
    assert_eq!(calculation.test_costs[0].cost, 100_000.0);

    // FS-LS-3C95 prices its own fire test; the SKU map wins
    let calculation = calculator
        .calculate_price("FS-LS-3C95", 100, &["Fire Resistance Test".to_string()], &[])
        .unwrap();
    assert_eq!(calculation.test_costs[0].cost, 95_000.0);
}

#[test]
fn test_every_requested_item_receives_a_cost() {
    let table = PricingTable::load_embedded().unwrap();
    let calculator = PricingCalculator::new(&table);

    let tests = vec![
        "Routine Test".to_string(),
        "Completely Unheard Of Test".to_string(),
    ];
    let services = vec!["Delivery".to_string(), "Unknown Service".to_string()];

    let calculation = calculator
        .calculate_price("MV-XL-3C185", 100, &tests, &services)
        .unwrap();

    assert_eq!(calculation.test_costs.len(), tests.len());
    assert_eq!(calculation.service_costs.len(), services.len());
    assert!(calculation.test_costs.iter().all(|t| t.cost > 0.0));
    assert!(calculation.service_costs.iter().all(|s| s.cost > 0.0));
}

#[test]
fn test_quote_flows_into_strategy_helpers() {
    let table = PricingTable::load_embedded().unwrap();
    let calculator = PricingCalculator::new(&table);

    let calculation = calculator
        .calculate_price("MV-XL-3C185", 5000, &[], &[])
        .unwrap();

    let scenarios = scenario_prices(calculation.total, &TargetMargins::default());
    assert!(scenarios.recommended > calculation.total);

    // The recommended price carries exactly the recommended margin
    let margin = margin_percent(calculation.total, scenarios.recommended);
    assert!((margin - 15.0).abs() < 1e-9);

    // Per-unit list price sits inside the medium-voltage market band
    let market = estimate_market_price("Medium Voltage Cables");
    assert!(calculation.unit_price >= market.min);
    assert!(calculation.unit_price <= market.max);

    // A quote far above the market average is classified premium
    let position = market_position(market.average * 5000.0 * 1.5, market.average * 5000.0);
    assert_eq!(position, MarketPosition::Premium);
}
