//! # tally-cli
//!
//! Command logic behind the `tally` binary. Kept in the library target so
//! it is tested without spawning a process; `main.rs` only wires up
//! configuration, tracing and exit codes.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

use std::io::Read;
use std::path::Path;

use tally_core::{charge, ChargeRequest};
use tracing::{debug, info};

use crate::cli::{Command, OutputFormat};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{render_checked, render_receipt, CheckedRequest};

/// Loads configuration and applies the `--format` flag on top of it.
pub fn load_config(path: Option<&Path>, format: Option<OutputFormat>) -> CliResult<CliConfig> {
    Ok(CliConfig::load(path)?.with_format(format))
}

/// Runs a parsed command and returns what should be printed to stdout.
pub fn run(command: &Command, config: &CliConfig) -> CliResult<String> {
    let request = read_request(command.input().input.as_deref())?;
    execute(command, &request, config)
}

/// Executes a command against an already-parsed request.
pub fn execute(command: &Command, request: &ChargeRequest, config: &CliConfig) -> CliResult<String> {
    let (invoice, payments) = request.into_parts()?;
    debug!(
        command = command.name(),
        total = %invoice.total,
        payments = payments.len(),
        "Request validated"
    );

    match command {
        Command::Charge(_) => {
            let receipt = charge(&invoice, &payments).map_err(tally_core::CoreError::from)?;
            info!(
                total = %receipt.total,
                deposit = %receipt.deposit,
                change = %receipt.change,
                "Charge settled"
            );
            render_receipt(&receipt, config)
        }
        Command::Check(_) => render_checked(&CheckedRequest { invoice, payments }, config),
    }
}

/// Reads a request from `path`, or stdin when `path` is `None` or `-`.
pub fn read_request(path: Option<&Path>) -> CliResult<ChargeRequest> {
    let (name, json) = match path {
        Some(path) if path != Path::new("-") => {
            let name = path.display().to_string();
            let json = std::fs::read_to_string(path).map_err(|e| CliError::io(&name, e))?;
            (name, json)
        }
        _ => {
            let mut json = String::new();
            std::io::stdin()
                .read_to_string(&mut json)
                .map_err(|e| CliError::io("stdin", e))?;
            ("stdin".to_string(), json)
        }
    };

    debug!(source = %name, bytes = json.len(), "Request read");
    parse_request(&json)
}

pub fn parse_request(json: &str) -> CliResult<ChargeRequest> {
    Ok(serde_json::from_str(json)?)
}
