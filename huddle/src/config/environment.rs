//! Environment variable handling for configuration overrides.
//!
//! This module provides support for HUDDLE_* environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use huddle::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads all HUDDLE_* environment variables and applies them to the
    /// configuration with higher precedence than file-based configs.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric timeout, unknown output format).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        // HUDDLE_DB_PATH
        if let Ok(path) = env::var("HUDDLE_DB_PATH") {
            config.database_path = Some(PathBuf::from(path));
        }

        // HUDDLE_BUSY_TIMEOUT
        if let Ok(seconds) = env::var("HUDDLE_BUSY_TIMEOUT") {
            config.maximum_lock_wait_seconds =
                Some(seconds.parse().map_err(|_| Error::Validation {
                    field: "HUDDLE_BUSY_TIMEOUT".into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        // HUDDLE_OUTPUT_FORMAT
        if let Ok(format) = env::var("HUDDLE_OUTPUT_FORMAT") {
            config.output_format =
                Some(Self::parse_output_format("HUDDLE_OUTPUT_FORMAT", &format)?);
        }

        Ok(())
    }

    /// Parse an output format from a string.
    ///
    /// Accepts: json, csv, tsv, table (case-insensitive).
    fn parse_output_format(field: &str, s: &str) -> Result<OutputFormat> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "table" => Ok(OutputFormat::Table),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid output format: '{s}' (expected json/csv/tsv/table)"),
            }),
        }
    }
}
