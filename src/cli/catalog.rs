//! Catalog command - list, show, or export products.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::ProductCatalog;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all products in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Filter by category substring (e.g. "Medium Voltage")
        #[arg(long)]
        category: Option<String>,

        /// Only list products currently marked available
        #[arg(long)]
        available_only: bool,
    },

    /// Show details of a specific product
    Show {
        /// Product SKU
        #[arg(required = true)]
        sku: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List {
            catalog,
            category,
            available_only,
        } => run_list(catalog, category.as_deref(), available_only, format, verbose),
        CatalogCommands::Show { sku, catalog } => run_show(&sku, catalog, format),
        CatalogCommands::Export { output, catalog } => run_export(output, catalog),
    }
}

fn load_catalog(path: Option<PathBuf>) -> anyhow::Result<ProductCatalog> {
    Ok(if let Some(path) = path {
        ProductCatalog::load_from_file(&path)?
    } else {
        ProductCatalog::load_embedded()?
    })
}

fn run_list(
    catalog_path: Option<PathBuf>,
    category_filter: Option<&str>,
    available_only: bool,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    if verbose {
        eprintln!("Loaded catalog with {} products", catalog.len());
    }

    let filtered: Vec<_> = catalog
        .products
        .iter()
        .filter(|p| {
            if let Some(category) = category_filter {
                if !p.category.to_lowercase().contains(&category.to_lowercase()) {
                    return false;
                }
            }
            !available_only || p.available
        })
        .collect();

    match format {
        OutputFormat::Text => {
            let sku_width = filtered
                .iter()
                .map(|p| p.sku.0.len())
                .max()
                .unwrap_or(3)
                .max(3);
            let category_width = filtered
                .iter()
                .map(|p| p.category.len())
                .max()
                .unwrap_or(8)
                .max(8);

            println!("Product Catalog ({} products)\n", filtered.len());
            println!(
                "{:<sku_w$} {:<cat_w$} {:>10} {:>9}  Name",
                "SKU",
                "Category",
                "Price/m",
                "Available",
                sku_w = sku_width,
                cat_w = category_width,
            );
            println!("{}", "-".repeat(sku_width + category_width + 60));

            for p in &filtered {
                println!(
                    "{:<sku_w$} {:<cat_w$} {:>10.2} {:>9}  {}",
                    p.sku.0,
                    p.category,
                    p.price_per_meter,
                    if p.available { "yes" } else { "no" },
                    p.name,
                    sku_w = sku_width,
                    cat_w = category_width,
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = filtered
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "sku": p.sku.0,
                        "name": p.name,
                        "category": p.category,
                        "specifications": p.specifications,
                        "certifications": p.certifications,
                        "price_per_meter": p.price_per_meter,
                        "available": p.available,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("sku\tname\tcategory\tprice_per_meter\tavailable");
            for p in &filtered {
                println!(
                    "{}\t{}\t{}\t{:.2}\t{}",
                    p.sku, p.name, p.category, p.price_per_meter, p.available
                );
            }
        }
    }

    Ok(())
}

fn run_show(sku: &str, catalog_path: Option<PathBuf>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let product = catalog
        .get(sku)
        .ok_or_else(|| anyhow::anyhow!("Product '{}' not found", sku))?;

    match format {
        OutputFormat::Text => {
            println!("Product: {}\n", product.name);
            println!("SKU:       {}", product.sku);
            println!("Category:  {}", product.category);
            println!("Price/m:   {:.2}", product.price_per_meter);
            println!("Available: {}", product.available);

            println!("\nSpecifications:");
            let specs = &product.specifications;
            let rows = [
                ("Voltage", &specs.voltage),
                ("Size", &specs.size),
                ("Conductor", &specs.conductor),
                ("Insulation", &specs.insulation),
                ("Armoring", &specs.armoring),
                ("Standard", &specs.standard),
            ];
            for (label, value) in rows {
                println!("  {:<11} {}", label, value.as_deref().unwrap_or("-"));
            }

            if !product.certifications.is_empty() {
                println!("\nCertifications: {}", product.certifications.join(", "));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&product)?);
        }
        OutputFormat::Tsv => {
            println!("sku\tname\tcategory\tprice_per_meter\tavailable");
            println!(
                "{}\t{}\t{}\t{:.2}\t{}",
                product.sku, product.name, product.category, product.price_per_meter,
                product.available
            );
        }
    }

    Ok(())
}

fn run_export(output: PathBuf, catalog_path: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let json = catalog.to_json()?;
    std::fs::write(&output, json)?;

    println!(
        "Exported {} products to {}",
        catalog.len(),
        output.display()
    );

    Ok(())
}
