// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! District Locator CLI
//!
//! Finds which congressional district an address or coordinate falls in,
//! and exports styled district boundaries for the campaign map.

use clap::Parser;
use district_locator::{
    cli::{log_filter, Cli},
    config::Config,
};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Structured JSON logs on stderr; stdout carries command output
    init_logging(cli.verbose);

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };
    if let Err(e) = cli.apply_to(&mut config) {
        tracing::error!(error = %e, "Invalid arguments");
        eprintln!("error: {}", e);
        return ExitCode::from(e.exit_code() as u8);
    }

    let mut stdout = std::io::stdout().lock();
    match district_locator::cli::run(&cli, &config, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Initialize structured JSON logging.
fn init_logging(verbose: u8) {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::registry()
        .with(log_filter(rust_log.as_deref(), verbose))
        .with(format)
        .init();
}
