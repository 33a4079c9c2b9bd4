//! Command-line arguments for the `mart` binary.
//!
//! Defaults reproduce the original hard-coded storefront run, so invoking
//! `mart` with no arguments quotes the fanny pack shipped to Broadway.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mart")]
#[command(about = "Checkout quote calculator for the Mart catalog")]
#[command(version)]
pub struct Args {
    /// Product name, matched exactly (case-sensitive) against the catalog
    #[arg(long, default_value = "fanny pack")]
    pub product: String,

    /// Free-form shipping address
    #[arg(long, default_value = "575 Broadway, New York City, New York")]
    pub address: String,

    /// Path to a catalog JSON file (array of {name, price_cents, pre_order});
    /// omit to use the built-in catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Enable verbose logging (equivalent to RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}
