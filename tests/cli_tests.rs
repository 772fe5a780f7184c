//! End-to-end tests for the rfp-solver binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn rfp_solver() -> Command {
    Command::cargo_bin("rfp-solver").unwrap()
}

fn write_request(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".json").unwrap();
    write!(file, "{json}").unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_identify_text_output() {
    let request = write_request(
        r#"{
            "rfp_id": "RFP-2026-014",
            "specifications": {
                "voltage": "11kV",
                "size": "3C x 185 sq.mm",
                "conductor": "Aluminium",
                "insulation": "XLPE",
                "armoring": "SWA",
                "standard": "IS 7098"
            },
            "quantity": 5000
        }"#,
    );

    rfp_solver()
        .args(["identify"])
        .arg(request.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("MV-XL-3C185"))
        .stdout(predicate::str::contains("100%"))
        .stdout(predicate::str::contains("compatible"));
}

#[test]
fn test_identify_json_output() {
    let request = write_request(r#"{"specifications": {"voltage": "11kV", "insulation": "XLPE"}}"#);

    rfp_solver()
        .args(["identify", "--format", "json", "--top", "2"])
        .arg(request.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"match_score\""))
        .stdout(predicate::str::contains("\"matched_specs\""));
}

#[test]
fn test_identify_reads_stdin() {
    rfp_solver()
        .args(["identify", "-", "--format", "tsv"])
        .write_stdin(r#"{"specifications": {"voltage": "33kV"}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("rank\tsku"));
}

#[test]
fn test_identify_rejects_malformed_input() {
    let request = write_request("this is not json");

    rfp_solver()
        .args(["identify"])
        .arg(request.path())
        .assert()
        .failure();
}

#[test]
fn test_price_text_output() {
    rfp_solver()
        .args([
            "price",
            "MV-XL-3C185",
            "5000",
            "--test",
            "Routine Test",
            "--service",
            "Delivery",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Material cost"))
        .stdout(predicate::str::contains("Routine Test"))
        .stdout(predicate::str::contains("Total"));
}

#[test]
fn test_price_json_with_scenarios() {
    rfp_solver()
        .args([
            "price",
            "MV-XL-3C185",
            "5000",
            "--scenarios",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"calculation\""))
        .stdout(predicate::str::contains("\"recommended\""))
        .stdout(predicate::str::contains("\"market\""));
}

#[test]
fn test_price_unknown_sku_fails_with_message() {
    rfp_solver()
        .args(["price", "UNKNOWN-SKU", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("UNKNOWN-SKU"));
}

#[test]
fn test_price_rejects_zero_quantity() {
    rfp_solver()
        .args(["price", "MV-XL-3C185", "0"])
        .assert()
        .failure();
}

#[test]
fn test_catalog_list() {
    rfp_solver()
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MV-XL-3C185"))
        .stdout(predicate::str::contains("Medium Voltage Cables"));
}

#[test]
fn test_catalog_list_filtered() {
    rfp_solver()
        .args(["catalog", "list", "--category", "fire", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FS-LS-3C95"))
        .stdout(predicate::str::contains("MV-XL-3C185").not());
}

#[test]
fn test_catalog_show() {
    rfp_solver()
        .args(["catalog", "show", "MV-XL-3C185"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11kV"))
        .stdout(predicate::str::contains("IS 7098"));
}

#[test]
fn test_catalog_show_unknown_sku_fails() {
    rfp_solver()
        .args(["catalog", "show", "NO-SUCH-SKU"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NO-SUCH-SKU"));
}

#[test]
fn test_catalog_export_roundtrip() {
    let output = NamedTempFile::with_suffix(".json").unwrap();

    rfp_solver()
        .args(["catalog", "export"])
        .arg(output.path())
        .assert()
        .success();

    // The exported catalog is loadable as a custom catalog
    rfp_solver()
        .args(["catalog", "list", "--catalog"])
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("MV-XL-3C185"));
}
