//! Main entry point for the autolink-rs CLI tool
//!
//! Reads text from arguments or stdin and prints it with URLs, emails, phone
//! numbers, mentions and hashtags linked.

use autolink_rs::cli::Cli;
use autolink_rs::config::AppConfig;
use autolink_rs::error::Result;
use clap::Parser;
use log::{info, warn};

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Load configuration
    let loaded = match &cli.config {
        Some(file) => AppConfig::load_from(&autolink_rs::utils::path::expand_tilde(
            &file.to_string_lossy(),
        )),
        None => AppConfig::load(),
    };

    // Initialize logging; RUST_LOG still takes precedence
    let verbose = cli.verbose || loaded.as_ref().is_ok_and(|c| c.global.verbose);
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" }),
    )
    .init();

    info!("Starting autolink-rs v{}", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        warn!("Failed to load config: {}, using defaults", e);
        AppConfig::default()
    });

    // Execute CLI logic
    cli.run(config)?;

    Ok(())
}
