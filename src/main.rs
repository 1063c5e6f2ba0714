//! uitext - Estimate hardcoded user-facing text in client-side source trees
//!
//! uitext provides:
//! - Directory walking with fixed ignore and extension rules
//! - Heuristic extraction of attribute values, string literals and text nodes
//! - Code-like string classification
//! - A sorted per-file report with totals (md/json/jsonl)

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod backends;
mod cli;
mod core;
mod estimate;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);
    cli::run(cli)
}

/// Diagnostics go to stderr; stdout carries only the report
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
