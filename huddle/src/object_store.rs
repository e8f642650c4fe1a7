//! Object storage for room images.
//!
//! Room images live outside the database; rows only carry their URLs. The
//! deletion cascades need a way to release those objects once the owning
//! rows are gone, and that is the only capability this seam exposes.
//! Uploads happen out of band and arrive here as already-hosted URLs.

use crate::error::{Error, Result};

/// Release interface for stored room images.
///
/// Implementations are called after the owning database transaction has
/// committed. A failed release leaves an orphaned object behind, which
/// callers surface rather than rolling back already-committed work.
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStore {
    /// Releases the stored object at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the object cannot be released. Such errors are
    /// retryable; the object remains until a later release succeeds.
    fn delete(&self, url: &str) -> Result<()>;
}

/// An object store that releases nothing.
///
/// Used when no image hosting is configured: deletes succeed trivially and
/// the URL is only logged. Hosted deployments substitute a real client.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObjectStore;

impl ObjectStore for NoopObjectStore {
    fn delete(&self, url: &str) -> Result<()> {
        log::debug!("no object store configured; leaving {url} in place");
        Ok(())
    }
}

impl Error {
    /// Creates an object-store release error.
    #[must_use]
    pub fn object_store(url: impl Into<String>, details: impl Into<String>) -> Self {
        Self::ObjectStore {
            url: url.into(),
            details: details.into(),
        }
    }
}
