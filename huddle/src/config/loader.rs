//! Configuration file discovery and loading.
//!
//! This module handles locating and loading the huddle configuration file
//! and layering environment overrides on top.

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::Config;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from the data directory and the environment.
///
/// # Examples
///
/// ```no_run
/// use huddle::config::ConfigLoader;
///
/// let config = ConfigLoader::load(None).unwrap();
/// println!("database: {:?}", config.database_path);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the effective configuration.
    ///
    /// Reads `config.yaml` from the data directory (the default `~/.huddle`
    /// unless `data_dir` overrides it), falling back to built-in defaults
    /// when the file does not exist, then applies HUDDLE_* environment
    /// overrides on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or parsed, or if an environment override holds an invalid value.
    pub fn load(data_dir: Option<&Path>) -> Result<Config> {
        let config_path = Self::config_path(data_dir)?;

        let mut config = if config_path.exists() {
            Self::load_file(&config_path)?
        } else {
            Config::default()
        };

        EnvironmentConfig::apply_overrides(&mut config)?;
        Ok(config)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty or comments-only file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        let config: Option<Config> = serde_yaml::from_str(&contents)?;
        Ok(config.unwrap_or_default())
    }

    /// Get the configuration file path.
    fn config_path(data_dir: Option<&Path>) -> Result<PathBuf> {
        match data_dir {
            Some(dir) => Ok(dir.join("config.yaml")),
            None => Ok(crate::database::default_data_dir()?.join("config.yaml")),
        }
    }
}
