//! Database layer for persistent storage of the reservation system.
//!
//! This module provides a SQLite-based storage layer for users, companies,
//! rooms, and reservations, including connection management, schema
//! versioning, and CRUD operations. Dates and times are stored in formats
//! whose string ordering is chronological, so the overlap and expiry
//! queries can compare them directly.
//!
//! # Examples
//!
//! ```no_run
//! use huddle::database::{Database, DatabaseConfig};
//! use huddle::User;
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/huddle.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Create a user
//! let user = User::builder("u-1", "ada@example.com").build().unwrap();
//! db.create_user(&user).unwrap();
//!
//! // Look them up by email
//! let found = Database::get_user_by_email(db.connection(), "ada@example.com").unwrap();
//! assert!(found.is_some());
//! ```

mod companies;
mod config;
mod connection;
pub mod migrations;
mod reservations;
mod rooms;
mod schema;
mod transaction;
mod users;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
