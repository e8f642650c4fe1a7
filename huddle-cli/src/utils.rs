//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and database management.

use crate::error::CliError;
use huddle::config::ConfigLoader;
use huddle::{Config, Database, DatabaseConfig};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (`HUDDLE_*`)
/// 2. `config.yaml` in the data directory
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    ConfigLoader::load(global.data_dir.as_deref()).map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the database path from global options and configuration.
fn resolve_database_path(global: &GlobalOptions, config: &Config) -> Result<PathBuf, CliError> {
    // Priority: global option > configured path > default
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.join("huddle.db"));
    }

    if let Some(ref path) = config.database_path {
        return Ok(path.clone());
    }

    // Default: HUDDLE_DATA_DIR or ~/.huddle, joined with huddle.db
    huddle::database::resolve_database_path().map_err(CliError::from)
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_database_path(global, config)?;

    if !db_path.exists() && global.disable_autoinit {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path);

    // Set busy timeout if specified
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config =
            db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout_seconds) = config.maximum_lock_wait_seconds {
        db_config = db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Resolve the data directory path.
///
/// Returns the default data directory location: `~/.huddle`
pub fn resolve_data_dir() -> PathBuf {
    home::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".huddle")
}
