//! Configuration system for huddle.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file in the data directory
//! - Environment variable overrides
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Environment variables (HUDDLE_*)
//! 2. User config (`~/.huddle/config.yaml`)
//! 3. Built-in defaults
//!
//! # Examples
//!
//! Loading the effective configuration:
//!
//! ```no_run
//! use huddle::config::ConfigLoader;
//!
//! let config = ConfigLoader::load(None).unwrap();
//! if let Some(seconds) = config.maximum_lock_wait_seconds {
//!     println!("lock wait: {seconds}s");
//! }
//! ```
//!
//! Building a configuration programmatically:
//!
//! ```
//! use huddle::config::{Config, OutputFormat};
//!
//! let config = Config {
//!     output_format: Some(OutputFormat::Json),
//!     ..Default::default()
//! };
//!
//! assert_eq!(config.output_format, Some(OutputFormat::Json));
//! ```

pub mod environment;
pub mod loader;
pub mod schema;

// Re-export key types at module root
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::{Config, OutputFormat};
