//! # Command-Line Arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Settle an invoice against cash and coupon payments.
#[derive(Debug, Parser)]
#[command(name = "tally", version)]
pub struct Cli {
    /// Configuration file (default: ./tally.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the receipt for a charge request
    Charge(InputArgs),

    /// Validate a charge request and print its typed payments
    Check(InputArgs),
}

impl Command {
    pub fn input(&self) -> &InputArgs {
        match self {
            Command::Charge(args) | Command::Check(args) => args,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Charge(_) => "charge",
            Command::Check(_) => "check",
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct InputArgs {
    /// JSON charge request; reads stdin when omitted or "-"
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output format (overrides configuration)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}
