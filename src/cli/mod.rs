//! Command-line interface for rfp-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **identify**: Rank catalog products against a tender requirement file
//! - **price**: Calculate the cost roll-up for a SKU and quantity
//! - **catalog**: List, show, or export products from the catalog
//!
//! ## Usage
//!
//! ```text
//! # Rank products for an extracted tender requirement
//! rfp-solver identify tender.json
//!
//! # Pipe a requirement from the extraction pipeline
//! extract-specs tender.pdf | rfp-solver identify -
//!
//! # JSON output for scripting
//! rfp-solver identify tender.json --format json
//!
//! # Price the selected product
//! rfp-solver price MV-XL-3C185 5000 --test "Routine Test" --service Delivery
//!
//! # Include margin scenarios and the market estimate
//! rfp-solver price MV-XL-3C185 5000 --scenarios
//! ```

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod identify;
pub mod price;

#[derive(Parser)]
#[command(name = "rfp-solver")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Match RFP tender requirements against a product catalog and price responses")]
#[command(
    long_about = "rfp-solver helps you answer cable tenders.\n\nIt scores extracted tender requirements against a catalog of sellable products across six weighted attributes (voltage, conductor, insulation, size, armoring, standard) and provides:\n- Ranked product recommendations with per-attribute match explanations\n- A deterministic cost roll-up with quantity discounts and test/service costs\n- Margin scenarios and a coarse market-position estimate"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog products against a tender requirement
    Identify(identify::IdentifyArgs),

    /// Calculate pricing for a product
    Price(price::PriceArgs),

    /// Manage the product catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
