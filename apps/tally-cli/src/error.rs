//! # CLI Error Type
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in tally                                  │
//! │                                                                         │
//! │  load config ── ConfigError ───────┐                                   │
//! │       │                            │                                    │
//! │       ▼                            │                                    │
//! │  read input ── io::Error ──────────┤                                   │
//! │       │                            │                                    │
//! │       ▼                            ▼                                    │
//! │  parse JSON ── serde_json::Error ─► CliError ──► ErrorReport (stderr)   │
//! │       │                            ▲                  + exit code       │
//! │       ▼                            │                                    │
//! │  tally-core ── CoreError ──────────┘                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Receipt (stdout), exit 0                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Report Serialization
//! What a caller reads from stderr when a command fails:
//! ```json
//! {
//!   "code": "OVER_CHARGE",
//!   "message": "Bill of 1000 is already covered by a deposit of 1000, cash not accepted"
//! }
//! ```

use serde::Serialize;
use tally_core::{ChargeError, CoreError};
use thiserror::Error;

use crate::config::ConfigError;

/// Exit status for a refused charge or invalid payment values.
pub const EXIT_REJECTED: u8 = 2;

/// Exit status for unreadable input and internal failures.
pub const EXIT_FAILURE: u8 = 1;

/// Errors produced while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read {name}: {source}")]
    Io {
        name: String,
        source: std::io::Error,
    },

    #[error("Invalid charge request: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to render output: {0}")]
    Render(#[source] serde_json::Error),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub fn io(name: impl Into<String>, source: std::io::Error) -> Self {
        CliError::Io {
            name: name.into(),
            source,
        }
    }

    /// Machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Core(CoreError::Charge(charge)) => match charge {
                ChargeError::UnknownPaymentType { .. } => ErrorCode::UnknownPaymentType,
                ChargeError::OverCharge { .. } => ErrorCode::OverCharge,
                ChargeError::Shortage { .. } => ErrorCode::Shortage,
            },
            CliError::Core(CoreError::Validation(_)) => ErrorCode::ValidationError,
            CliError::Config(_) | CliError::Io { .. } | CliError::Parse(_) => {
                ErrorCode::InvalidInput
            }
            CliError::Render(_) => ErrorCode::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Core(_) => EXIT_REJECTED,
            _ => EXIT_FAILURE,
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Error codes written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    UnknownPaymentType,
    OverCharge,
    Shortage,
    ValidationError,
    InvalidInput,
    Internal,
}

/// Serializable error for callers of the binary.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}
