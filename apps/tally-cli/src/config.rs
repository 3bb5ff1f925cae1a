//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --format text                                                      │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TALLY_OUTPUT_FORMAT=text                                           │
//! │     TALLY_CURRENCY_SYMBOL=$                                            │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ./tally.toml, or the file given with --config                      │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # tally.toml
//! output_format = "text"   # json | text
//! currency_symbol = "$"
//! currency_decimals = 2
//! log_level = "warn,tally=debug"
//! pretty = true
//! ```

use std::path::Path;

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use tally_core::CurrencyFormat;

use crate::cli::OutputFormat;

/// Prefix for environment overrides (`TALLY_OUTPUT_FORMAT`, ...).
pub const ENV_PREFIX: &str = "TALLY";

/// Config file looked up in the working directory (any supported extension).
pub const DEFAULT_CONFIG_NAME: &str = "tally";

/// Largest supported number of minor-unit digits.
pub const MAX_CURRENCY_DECIMALS: u8 = 4;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Output format for results on stdout.
    pub output_format: OutputFormat,

    /// Currency symbol for text output.
    pub currency_symbol: String,

    /// Minor-unit digits for text output (0 for yen).
    pub currency_decimals: u8,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            output_format: OutputFormat::Json,
            currency_symbol: "¥".to_string(),
            currency_decimals: 0,
            log_level: "warn".to_string(),
            pretty: true,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the optional file and the environment.
    ///
    /// An explicit `path` must exist; the default `tally.*` file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let builder = Self::defaults()?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        Self::build(builder)
    }

    /// A builder pre-filled with [`CliConfig::default`] values.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = CliConfig::default();
        let format = match defaults.output_format {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        };

        Ok(Config::builder()
            .set_default("output_format", format)?
            .set_default("currency_symbol", defaults.currency_symbol)?
            .set_default("currency_decimals", defaults.currency_decimals as i64)?
            .set_default("log_level", defaults.log_level)?
            .set_default("pretty", defaults.pretty)?)
    }

    /// Resolves a builder into a validated configuration.
    pub fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: CliConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(ConfigError::InvalidValue(format!(
                "currency_decimals must be at most {}, got {}",
                MAX_CURRENCY_DECIMALS, self.currency_decimals
            )));
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "log_level must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Applies a command-line `--format` flag.
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.output_format = format;
        }
        self
    }

    pub fn currency(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_symbol.clone(), self.currency_decimals)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Source(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::config::FileFormat;

    fn from_toml(toml: &str) -> Result<CliConfig, ConfigError> {
        let builder = CliConfig::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml));
        CliConfig::build(builder)
    }

    #[test]
    fn test_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.currency(), CurrencyFormat::new("¥", 0));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = from_toml(
            r#"
            output_format = "text"
            currency_symbol = "$"
            currency_decimals = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.currency(), CurrencyFormat::new("$", 2));
        assert!(config.pretty);
    }

    #[test]
    fn test_rejects_too_many_decimals() {
        let err = from_toml("currency_decimals = 9").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_rejects_unknown_format() {
        let err = from_toml(r#"output_format = "xml""#).unwrap_err();
        assert!(matches!(err, ConfigError::Source(_)));
    }

    #[test]
    fn test_flag_overrides_config() {
        let config = CliConfig::default().with_format(Some(OutputFormat::Text));
        assert_eq!(config.output_format, OutputFormat::Text);

        let config = config.with_format(None);
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let result = CliConfig::load(Some(Path::new("/nonexistent/tally.toml")));
        assert!(matches!(result, Err(ConfigError::Source(_))));
    }
}
