use std::path::Path;

fn main() {
    validate_products_file(Path::new("catalogs/cable_products.json"));
    validate_pricing_file(Path::new("catalogs/pricing.json"));
    set_build_dependencies();
}

fn read_json(label: &str, path: &Path) -> serde_json::Value {
    // Ensure the data file exists at build time
    assert!(
        path.exists(),
        "\n\n{label} BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the data file before building.\n",
        path.display()
    );

    let contents = std::fs::read_to_string(path).unwrap_or_else(|e| {
        panic!(
            "\n\n{label} BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            path.display()
        );
    });

    serde_json::from_str(&contents).unwrap_or_else(|e| {
        panic!(
            "\n\n{label} BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            path.display()
        );
    })
}

fn validate_products_file(path: &Path) {
    let catalog = read_json("CATALOG", path);

    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let products = catalog.get("products").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'products' field\n\
             The catalog must have a top-level 'products' array.\n"
        );
    });

    let products = products.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'products' must be an array\n\
             Got: {products}\n"
        );
    });

    for (i, product) in products.iter().enumerate() {
        let sku = product
            .get("sku")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        assert!(
            product.get("sku").is_some(),
            "\n\nCATALOG BUILD ERROR: Product at index {i} missing 'sku' field\n"
        );
        assert!(
            product.get("name").is_some(),
            "\n\nCATALOG BUILD ERROR: Product '{sku}' (index {i}) missing 'name' field\n"
        );
        assert!(
            product.get("specifications").is_some(),
            "\n\nCATALOG BUILD ERROR: Product '{sku}' (index {i}) missing 'specifications' field\n"
        );

        // Validate price is positive when present
        if let Some(price) = product
            .get("price_per_meter")
            .and_then(serde_json::Value::as_f64)
        {
            assert!(
                price > 0.0,
                "\n\nCATALOG BUILD ERROR: Product '{sku}' has non-positive price_per_meter\n\
                 Prices must be > 0.\n"
            );
        }
    }

    println!(
        "cargo:warning=Validated product catalog: {} products",
        products.len()
    );
}

fn validate_pricing_file(path: &Path) {
    let pricing = read_json("PRICING", path);

    let entries = pricing.get("entries").unwrap_or_else(|| {
        panic!(
            "\n\nPRICING BUILD ERROR: Missing 'entries' field\n\
             The pricing table must have a top-level 'entries' array.\n"
        );
    });

    let entries = entries.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nPRICING BUILD ERROR: 'entries' must be an array\n\
             Got: {entries}\n"
        );
    });

    for (i, entry) in entries.iter().enumerate() {
        let sku = entry
            .get("sku")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        assert!(
            entry.get("sku").is_some(),
            "\n\nPRICING BUILD ERROR: Entry at index {i} missing 'sku' field\n"
        );

        let base_price = entry.get("base_price");
        assert!(
            base_price.is_some(),
            "\n\nPRICING BUILD ERROR: Entry '{sku}' (index {i}) missing 'base_price' field\n"
        );

        if let Some(price) = base_price.and_then(serde_json::Value::as_f64) {
            assert!(
                price > 0.0,
                "\n\nPRICING BUILD ERROR: Entry '{sku}' has non-positive base_price\n\
                 Base prices must be > 0.\n"
            );
        }
    }

    println!(
        "cargo:warning=Validated pricing table: {} entries",
        entries.len()
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the embedded data changes
    println!("cargo:rerun-if-changed=catalogs/cable_products.json");
    println!("cargo:rerun-if-changed=catalogs/pricing.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
