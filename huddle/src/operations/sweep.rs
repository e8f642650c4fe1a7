//! Batch expiry sweep over elapsed reservations.
//!
//! A reservation has expired once its date lies before the sweep date, or
//! its date is the sweep date and its end time is strictly before the sweep
//! time. A slot ending exactly at the sweep time has not expired yet. The
//! comparison happens on parsed calendar values, so a January reservation
//! expires under a February sweep even though `"31/01/2025"` sorts after
//! `"01/02/2025"` as a display string.
//!
//! The sweep is stateless and idempotent: running it twice at the same
//! instant removes nothing on the second pass, and removing nothing is a
//! normal outcome, not an error.
//!
//! ## Transactional Semantics
//!
//! The candidate query and the batch delete run inside one immediate
//! transaction, so a sweep never observes half of a booking that is being
//! committed concurrently, and concurrent sweeps serialize instead of
//! double-counting. A dry run deletes nothing, so it is a plain read on the
//! connection and never takes the write lock.

use crate::database::Database;
use crate::error::Result;
use crate::reservation::Reservation;
use crate::timeslot::{ReservationDate, SlotTime};

/// Result of a sweep pass.
#[derive(Debug)]
pub struct SweepResult {
    /// Number of reservations removed (or that would be removed in dry-run).
    pub removed_count: usize,
    /// The expired reservations, ordered by date then start time.
    pub removed_reservations: Vec<Reservation>,
}

/// Operations for retiring reservations whose slot has elapsed.
pub struct SweepOperations;

impl SweepOperations {
    /// Removes every reservation that has expired as of the given instant.
    ///
    /// The caller supplies the clock; the sweep itself never consults the
    /// system time, which keeps replays and tests deterministic. In dry-run
    /// mode the result reports what would be removed without deleting
    /// anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started or committed,
    /// or if the candidate query or batch delete fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle::database::{Database, DatabaseConfig};
    /// use huddle::operations::SweepOperations;
    /// use huddle::{ReservationDate, SlotTime};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/huddle.db")).unwrap();
    /// let now_date = ReservationDate::parse("06/05/2025").unwrap();
    /// let now_time = SlotTime::parse("12:00").unwrap();
    ///
    /// // Preview what would be removed
    /// let preview = SweepOperations::sweep(&mut db, now_date, now_time, true).unwrap();
    /// println!("would remove {} reservations", preview.removed_count);
    ///
    /// // Actually remove them
    /// let result = SweepOperations::sweep(&mut db, now_date, now_time, false).unwrap();
    /// println!("removed {} reservations", result.removed_count);
    /// ```
    pub fn sweep(
        db: &mut Database,
        now_date: ReservationDate,
        now_time: SlotTime,
        dry_run: bool,
    ) -> Result<SweepResult> {
        if dry_run {
            let removed_reservations =
                Database::list_expired_reservations(db.connection(), now_date, now_time)?;
            let removed_count = removed_reservations.len();
            log::debug!("dry run: {removed_count} expired reservation(s) would be removed");
            return Ok(SweepResult {
                removed_count,
                removed_reservations,
            });
        }

        let tx = db.begin_transaction()?;

        let removed_reservations = Database::list_expired_reservations(&tx, now_date, now_time)?;
        let removed_count = removed_reservations.len();
        Database::delete_expired_reservations_simple(&tx, now_date, now_time)?;
        tx.commit()?;
        log::debug!("sweep removed {removed_count} expired reservation(s)");

        Ok(SweepResult {
            removed_count,
            removed_reservations,
        })
    }
}
