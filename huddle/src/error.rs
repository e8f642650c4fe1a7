//! Error types for the huddle library.
//!
//! This module provides a comprehensive error hierarchy for all operations
//! in the huddle library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a huddle error.
///
/// # Examples
///
/// ```
/// use huddle::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(12)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the huddle library.
///
/// This enum encompasses all possible error conditions that can occur
/// during reservation lifecycle operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A reservation date string could not be parsed.
    #[error("invalid date '{value}': {reason}")]
    InvalidDate {
        /// The unparseable date string.
        value: String,
        /// The reason the date is invalid.
        reason: String,
    },

    /// A time-of-day string could not be parsed.
    #[error("invalid time '{value}': {reason}")]
    InvalidTime {
        /// The unparseable time string.
        value: String,
        /// The reason the time is invalid.
        reason: String,
    },

    /// A slot string could not be parsed into a start/end pair.
    #[error("invalid slot '{value}': {reason}")]
    InvalidSlot {
        /// The unparseable slot string.
        value: String,
        /// The reason the slot is invalid.
        reason: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested operation conflicts with existing state.
    #[error("conflict on {entity}: {details}")]
    Conflict {
        /// The entity the conflict was detected on.
        entity: String,
        /// Details about the conflicting state.
        details: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The requester is not allowed to perform the action.
    #[error("forbidden: {action}")]
    Forbidden {
        /// The action that was refused.
        action: String,
    },

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// The object store could not complete a request.
    #[error("object store failure for '{url}': {details}")]
    ObjectStore {
        /// The object URL the request targeted.
        url: String,
        /// Details about the failure.
        details: String,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

// Additional conversions for better ergonomics

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<crate::timeslot::ParseDateError> for Error {
    fn from(err: crate::timeslot::ParseDateError) -> Self {
        Self::InvalidDate {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl From<crate::timeslot::ParseTimeError> for Error {
    fn from(err: crate::timeslot::ParseTimeError) -> Self {
        Self::InvalidTime {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl From<crate::timeslot::ParseSlotError> for Error {
    fn from(err: crate::timeslot::ParseSlotError) -> Self {
        Self::InvalidSlot {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl Error {
    /// Check if error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle::Error;
    ///
    /// let err = Error::NotFound { resource: "user 'a@b.com'".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error indicates a conflict with existing state.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle::Error;
    ///
    /// let err = Error::Conflict {
    ///     entity: "company".to_string(),
    ///     details: "name taken".to_string(),
    /// };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Check if error indicates a refused authorization.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }

    /// Check if error is transient and the operation safe to retry.
    ///
    /// Lock timeouts, busy/locked database states, and object store
    /// failures are transient; domain errors are not.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle::Error;
    ///
    /// let err = Error::LockTimeout { seconds: 5 };
    /// assert!(err.is_transient());
    /// ```
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::LockTimeout { .. } | Self::ObjectStore { .. } => true,
            Self::Database(rusqlite::Error::SqliteFailure(err, _)) => matches!(
                err.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }
}
