//! Identify command - rank catalog products against a tender requirement.
//!
//! The input is a `TenderRequest` JSON document as produced by the
//! extraction layer; only the `specifications` block drives the ranking.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::catalog::store::ProductCatalog;
use crate::cli::OutputFormat;
use crate::core::requirement::TenderRequest;
use crate::matching::engine::{SpecMatcher, SpecMatchResult};

/// Arguments for the identify command
#[derive(Args)]
pub struct IdentifyArgs {
    /// Tender requirement file (JSON). Use '-' to read from stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Number of matches to return
    #[arg(short, long, default_value = "3")]
    pub top: usize,

    /// Path to custom product catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Only consider products currently marked available
    #[arg(long)]
    pub available_only: bool,
}

/// Execute the identify command
///
/// # Errors
///
/// Returns an error if the requirement file cannot be read or parsed, or
/// the catalog cannot be loaded.
pub fn run(args: IdentifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let request = read_request(&args.input)?;

    if verbose {
        if let Some(rfp_id) = &request.rfp_id {
            eprintln!("Tender: {rfp_id}");
        }
        if request.specifications.is_empty() {
            eprintln!("Warning: requirement has no technical attributes to compare");
        }
    }

    let catalog = if let Some(path) = &args.catalog {
        ProductCatalog::load_from_file(path)?
    } else {
        ProductCatalog::load_embedded()?
    };

    let products = if args.available_only {
        catalog.available_products()
    } else {
        catalog.products.clone()
    };

    if verbose {
        eprintln!("Scoring {} products", products.len());
    }

    let matcher = SpecMatcher::new();
    let results = matcher.find_top_matches(&request.specifications, &products, args.top);

    match format {
        OutputFormat::Text => print_text_results(&results),
        OutputFormat::Json => print_json_results(&results)?,
        OutputFormat::Tsv => print_tsv_results(&results),
    }

    Ok(())
}

fn read_request(input: &Path) -> anyhow::Result<TenderRequest> {
    if input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(serde_json::from_str(&buffer)?)
    } else {
        let content = std::fs::read_to_string(input)?;
        Ok(serde_json::from_str(&content)?)
    }
}

fn print_text_results(results: &[SpecMatchResult]) {
    if results.is_empty() {
        println!("No products to compare.");
        return;
    }

    for (rank, result) in results.iter().enumerate() {
        let verdict = if result.is_compatible() {
            "compatible"
        } else {
            "below threshold"
        };

        println!(
            "\n{}. {} ({})  {}% - {}",
            rank + 1,
            result.product.name,
            result.product.sku,
            result.match_score,
            verdict
        );

        if !result.matched_specs.is_empty() {
            println!("   Matched:   {}", result.matched_specs.join(", "));
        }
        if !result.unmatched_specs.is_empty() {
            println!("   Unmatched: {}", result.unmatched_specs.join(", "));
        }
        for strength in &result.strengths {
            println!("   + {strength}");
        }
        for gap in &result.gaps {
            println!("   - {gap}");
        }
    }
}

fn print_json_results(results: &[SpecMatchResult]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}

fn print_tsv_results(results: &[SpecMatchResult]) {
    println!("rank\tsku\tname\tmatch_score\tcompatible\tmatched_specs\tunmatched_specs");
    for (rank, result) in results.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            rank + 1,
            result.product.sku,
            result.product.name,
            result.match_score,
            result.is_compatible(),
            result.matched_specs.join(","),
            result.unmatched_specs.join(","),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_request_from_file() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        writeln!(
            file,
            r#"{{"rfp_id": "RFP-1", "specifications": {{"voltage": "11kV"}}, "quantity": 5000}}"#
        )
        .unwrap();
        file.flush().unwrap();

        let request = read_request(file.path()).unwrap();
        assert_eq!(request.rfp_id.as_deref(), Some("RFP-1"));
        assert_eq!(request.specifications.voltage.as_deref(), Some("11kV"));
        assert_eq!(request.quantity, Some(5000));
    }

    #[test]
    fn test_read_request_invalid_json() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        writeln!(file, "not json").unwrap();
        file.flush().unwrap();

        assert!(read_request(file.path()).is_err());
    }

    #[test]
    fn test_read_request_missing_file() {
        assert!(read_request(Path::new("/no/such/requirement.json")).is_err());
    }
}
