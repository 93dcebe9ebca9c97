// SPDX-License-Identifier: MIT

//! GMC - Commit Message Validation Gate
//!
//! Accepts a commit message file silently or rejects it with a specific,
//! actionable diagnostic.

use clap::Parser;
use gmc::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.verbose);

    // Run the check
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging/tracing.
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_new("gmc=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if verbose {
        tracing::debug!("Verbose logging enabled");
    }
}
