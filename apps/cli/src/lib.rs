//! # Mart CLI Library
//!
//! Orchestration for the `mart` binary.
//!
//! ## Module Organization
//! ```text
//! mart_cli/
//! ├── lib.rs     ◄─── You are here (tracing setup & run)
//! ├── args.rs    ◄─── clap argument definitions
//! └── render.rs  ◄─── summary block rendering
//! ```
//!
//! ## Run Sequence
//! 1. Initialize tracing (default INFO, `RUST_LOG` override, `-v` = debug)
//! 2. Load the catalog (JSON file if `--catalog`, else built-in set)
//! 3. Look up the product and compute the quote
//! 4. Print notices, then the summary block, to stdout
//!
//! Any failure aborts the run with a diagnostic and a non-zero exit before
//! the summary block is printed. Notices and the summary are contract
//! stdout output; tracing lines are diagnostics on the side.

pub mod args;
pub mod render;

use std::fs;

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use args::Args;
use mart_core::quote::{notices, quote_by_name};
use mart_core::Catalog;

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so the quote output on stdout stays clean.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "info" };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one quote: catalog load, lookup, computation, output.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let catalog = load_catalog(args)?;
    info!(products = catalog.len(), "Catalog loaded");

    let (product, quote) = quote_by_name(&catalog, &args.product, &args.address)?;
    debug!(
        product = %product.name,
        tax_bps = quote.tax_rate.bps(),
        shipping_cents = quote.shipping.cents(),
        "Quote computed"
    );

    for notice in notices(product, &quote) {
        println!("{notice}");
    }

    print!("{}", render::summary(product, &args.address, &quote));

    Ok(())
}

/// Loads the catalog from the `--catalog` file, or falls back to the
/// built-in set.
fn load_catalog(args: &Args) -> anyhow::Result<Catalog> {
    match &args.catalog {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog file {}", path.display()))?;
            let catalog = Catalog::from_json(&text)
                .with_context(|| format!("invalid catalog file {}", path.display()))?;
            Ok(catalog)
        }
        None => {
            debug!("No catalog file given, using built-in catalog");
            Ok(Catalog::built_in())
        }
    }
}
