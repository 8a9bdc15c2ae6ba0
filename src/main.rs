//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_probe` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_probe::cli::{run, Cli};
use domain_probe::initialization::init_logger_with;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(&cli).await {
        Ok(true) => Ok(()),
        // Per-input failures were already reported
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("domain_probe error: {:#}", e);
            process::exit(1);
        }
    }
}
