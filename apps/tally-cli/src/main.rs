//! # tally
//!
//! ```text
//! $ echo '{"invoice":{"total":1000},"payments":[{"type":"CASH","amount":1500}]}' | tally charge
//! {
//!   "total": 1000,
//!   "deposit": 1500,
//!   "change": 500
//! }
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tally_cli::cli::Cli;
use tally_cli::error::CliError;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Tracing is configured from the loaded config, so a config failure is
    // reported before any subscriber exists.
    let config = match tally_cli::load_config(cli.config.as_deref(), cli.command.input().format) {
        Ok(config) => config,
        Err(err) => return report_failure(&err),
    };

    init_tracing(&config.log_level);
    info!(command = cli.command.name(), format = ?config.output_format, "Starting tally");

    match tally_cli::run(&cli.command, &config) {
        Ok(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => report_failure(&err),
    }
}

/// Writes the structured error report to stderr and picks the exit status.
fn report_failure(err: &CliError) -> anyhow::Result<ExitCode> {
    let report = err.report();
    debug!(code = ?report.code, "{}", report.message);
    let rendered = serde_json::to_string(&report).context("Failed to render error")?;
    eprintln!("{}", rendered);
    Ok(ExitCode::from(err.exit_code()))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally=trace` - Show trace for tally crates only
/// - Default: `log_level` from configuration
fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
