//! Configuration schema definitions.
//!
//! This module defines the structure of huddle configuration files.
//! All fields are optional so that partial configs can be layered with
//! environment overrides and built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
///
/// Unknown fields are rejected so that typos in `config.yaml` surface as
/// errors instead of being silently ignored.
///
/// # Examples
///
/// ```
/// use huddle::config::Config;
///
/// let config = Config::default();
/// assert!(config.database_path.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the SQLite database file.
    pub database_path: Option<PathBuf>,

    /// Maximum time to wait for a database lock before giving up.
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use huddle::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
    /// Human-readable table format.
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Table => write!(f, "table"),
        }
    }
}
