//! # Mart Entry Point
//!
//! Parses arguments and hands off to [`mart_cli::run`]. A returned error is
//! printed by anyhow with its context chain and the process exits non-zero,
//! so a missing product surfaces as `Error: Product not found: <name>`.

use clap::Parser;

use mart_cli::args::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    mart_cli::init_tracing(args.verbose);
    mart_cli::run(&args)
}
