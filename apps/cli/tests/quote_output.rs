//! End-to-end output scenarios: catalog lookup through rendered text.
//!
//! These mirror what a user sees on stdout - notice lines first, then the
//! summary block - without going through process spawning.

use mart_cli::render;
use mart_core::quote::{notices, quote_by_name};
use mart_core::{Catalog, CoreError, Notice};

const NY_ADDRESS: &str = "575 Broadway, New York City, New York";
const TX_ADDRESS: &str = "1100 Congress Ave, Austin, TX";

/// Renders the full stdout for a run: notices, then the summary block.
fn run_to_string(catalog: &Catalog, product_name: &str, address: &str) -> Result<String, CoreError> {
    let (product, quote) = quote_by_name(catalog, product_name, address)?;

    let mut out = String::new();
    for notice in notices(product, &quote) {
        out.push_str(&notice.to_string());
        out.push('\n');
    }
    out.push_str(&render::summary(product, address, &quote));
    Ok(out)
}

#[test]
fn default_run_fanny_pack_to_broadway() {
    let catalog = Catalog::built_in();
    let out = run_to_string(&catalog, "fanny pack", NY_ADDRESS).unwrap();

    // No pre-order, no free shipping: the summary block is the whole output.
    assert_eq!(
        out,
        "Product:  fanny pack\n\
         Address:  575 Broadway, New York City, New York\n\
         Price:    $20.00\n\
         Tax:      $2.00\n\
         Shipping: $5.00\n\
         Total:    $27.00\n"
    );
}

#[test]
fn free_shipping_notice_precedes_summary() {
    let catalog = Catalog::from_json(
        r#"[{ "name": "fanny pack", "price_cents": 3000, "pre_order": false }]"#,
    )
    .unwrap();
    let out = run_to_string(&catalog, "fanny pack", TX_ADDRESS).unwrap();

    assert_eq!(
        out,
        "This product will receive free shipping\n\
         Product:  fanny pack\n\
         Address:  1100 Congress Ave, Austin, TX\n\
         Price:    $30.00\n\
         Tax:      $1.50\n\
         Shipping: $0.00\n\
         Total:    $31.50\n"
    );
}

#[test]
fn pre_order_notice_emitted_once() {
    let catalog = Catalog::built_in();
    let out = run_to_string(&catalog, "moon boots", NY_ADDRESS).unwrap();

    let expected = Notice::PreOrder.to_string();
    assert_eq!(out.matches(&expected).count(), 1);
    // $59.99 also clears the free-shipping threshold.
    assert_eq!(out.matches("free shipping").count(), 1);
    assert!(out.ends_with("Total:    $65.99\n"));
}

#[test]
fn missing_product_fails_before_any_output() {
    let catalog = Catalog::built_in();
    let err = run_to_string(&catalog, "solar shades", NY_ADDRESS).unwrap_err();

    assert!(matches!(err, CoreError::ProductNotFound(_)));
    assert_eq!(err.to_string(), "Product not found: solar shades");
}
