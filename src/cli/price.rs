//! Price command - deterministic cost roll-up for a SKU and quantity.
//!
//! With `--scenarios` the output additionally includes margin scenarios and
//! the market-position estimate the pricing-strategy stage would use.

use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::ProductCatalog;
use crate::cli::OutputFormat;
use crate::pricing::calculator::{PriceCalculation, PricingCalculator};
use crate::pricing::data::PricingTable;
use crate::pricing::strategy::{
    estimate_market_price, market_position, scenario_prices, MarketEstimate, PricingScenarios,
    TargetMargins,
};

/// Arguments for the price command
#[derive(Args)]
pub struct PriceArgs {
    /// SKU of the selected product
    #[arg(required = true)]
    pub sku: String,

    /// Quantity in meters
    #[arg(required = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub quantity: u32,

    /// Required test (repeat for multiple tests)
    #[arg(long = "test", value_name = "NAME")]
    pub tests: Vec<String>,

    /// Required service (repeat for multiple services)
    #[arg(long = "service", value_name = "NAME")]
    pub services: Vec<String>,

    /// Path to custom pricing table file
    #[arg(long)]
    pub pricing: Option<PathBuf>,

    /// Include margin scenarios and the market estimate
    #[arg(long)]
    pub scenarios: bool,
}

/// Scenario analysis attached to the output with `--scenarios`
struct ScenarioAnalysis {
    targets: TargetMargins,
    prices: PricingScenarios,
    market: MarketEstimate,
}

/// Execute the price command
///
/// # Errors
///
/// Returns an error if the pricing table cannot be loaded or the SKU has
/// no pricing entry.
pub fn run(args: PriceArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let table = if let Some(path) = &args.pricing {
        PricingTable::load_from_file(path)?
    } else {
        PricingTable::load_embedded()?
    };

    if verbose {
        eprintln!("Pricing table: {} entries", table.len());
    }

    let calculator = PricingCalculator::new(&table);
    let calculation =
        calculator.calculate_price(&args.sku, args.quantity, &args.tests, &args.services)?;

    let analysis = if args.scenarios {
        Some(build_scenario_analysis(&args.sku, &calculation))
    } else {
        None
    };

    match format {
        OutputFormat::Text => print_text(&calculation, analysis.as_ref()),
        OutputFormat::Json => print_json(&calculation, analysis.as_ref())?,
        OutputFormat::Tsv => print_tsv(&calculation),
    }

    Ok(())
}

fn build_scenario_analysis(sku: &str, calculation: &PriceCalculation) -> ScenarioAnalysis {
    let targets = TargetMargins::default();
    let prices = scenario_prices(calculation.total, &targets);

    // The market band is keyed by product category; fall back to the
    // generic band when the SKU is not in the product catalog
    let category = ProductCatalog::load_embedded()
        .ok()
        .and_then(|catalog| catalog.get(sku).map(|p| p.category.clone()))
        .unwrap_or_default();
    let market = estimate_market_price(&category);

    ScenarioAnalysis {
        targets,
        prices,
        market,
    }
}

fn print_text(calculation: &PriceCalculation, analysis: Option<&ScenarioAnalysis>) {
    println!(
        "Pricing: {} x {} meters",
        calculation.sku, calculation.quantity
    );
    println!("\n   Unit price:    {:>14.2}", calculation.unit_price);
    println!("   Material cost: {:>14.2}", calculation.material_cost);

    if !calculation.test_costs.is_empty() {
        println!("\n   Tests:");
        for test in &calculation.test_costs {
            println!("     {:<30} {:>12.2}", test.test_name, test.cost);
        }
        println!("     {:<30} {:>12.2}", "Total", calculation.total_test_cost);
    }

    if !calculation.service_costs.is_empty() {
        println!("\n   Services:");
        for service in &calculation.service_costs {
            println!("     {:<30} {:>12.2}", service.service_name, service.cost);
        }
        println!(
            "     {:<30} {:>12.2}",
            "Total", calculation.total_service_cost
        );
    }

    println!("\n   Subtotal:      {:>14.2}", calculation.subtotal);
    println!("   Total:         {:>14.2}", calculation.total);

    if let Some(analysis) = analysis {
        println!("\n   Scenarios:");
        println!(
            "     Aggressive  ({:>2.0}% margin): {:>14.2}",
            analysis.targets.low, analysis.prices.aggressive
        );
        println!(
            "     Recommended ({:>2.0}% margin): {:>14.2}",
            analysis.targets.medium, analysis.prices.recommended
        );
        println!(
            "     Premium     ({:>2.0}% margin): {:>14.2}",
            analysis.targets.high, analysis.prices.premium
        );
        println!(
            "     Optimal     ({:>2.0}% margin): {:>14.2}",
            analysis.targets.optimal, analysis.prices.optimal
        );

        let quantity = f64::from(calculation.quantity);
        let market_total = analysis.market.average * quantity;
        println!(
            "\n   Market estimate: {:.0}-{:.0} per unit (avg {:.0}, {:.0} for this quantity)",
            analysis.market.min, analysis.market.max, analysis.market.average, market_total
        );
        println!(
            "   Position at recommended price: {}",
            market_position(analysis.prices.recommended, market_total)
        );
    }
}

fn print_json(
    calculation: &PriceCalculation,
    analysis: Option<&ScenarioAnalysis>,
) -> anyhow::Result<()> {
    let output = if let Some(analysis) = analysis {
        let quantity = f64::from(calculation.quantity);
        let market_total = analysis.market.average * quantity;

        serde_json::json!({
            "calculation": calculation,
            "scenarios": {
                "target_margins": analysis.targets,
                "prices": analysis.prices,
            },
            "market": {
                "per_unit": analysis.market,
                "average_for_quantity": market_total,
                "position_at_recommended": market_position(analysis.prices.recommended, market_total),
            },
        })
    } else {
        serde_json::to_value(calculation)?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(calculation: &PriceCalculation) {
    println!(
        "sku\tquantity\tunit_price\tmaterial_cost\ttotal_test_cost\ttotal_service_cost\tsubtotal\ttotal"
    );
    println!(
        "{}\t{}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}",
        calculation.sku,
        calculation.quantity,
        calculation.unit_price,
        calculation.material_cost,
        calculation.total_test_cost,
        calculation.total_service_cost,
        calculation.subtotal,
        calculation.total,
    );
}
