//! Multi-slot reservation booking, listing, and cancellation.
//!
//! Booking is all-or-nothing: every requested slot is parsed and checked
//! against the other slots in the same request before the database is
//! touched, then checked against committed reservations for the same room
//! and date inside one immediate transaction that also performs the
//! inserts. Any failure rolls the whole request back; no partial bookings
//! ever commit. Slot ranges are half-open, so back-to-back slots such as
//! `09:00 - 10:00` and `10:00 - 11:00` do not conflict.
//!
//! Cancellation is owner-only: knowing a reservation id is not enough, the
//! requester must be the user the reservation belongs to.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationView};
use crate::timeslot::{ReservationDate, Slot};

/// Options for booking one or more slots in a room on a date.
#[derive(Debug, Clone)]
pub struct ReserveOptions {
    /// Email of the booking user.
    pub user_email: String,
    /// Identifier of the room being booked.
    pub room_id: String,
    /// Reservation date in `DD/MM/YYYY` form.
    pub date: String,
    /// Requested slots, each in `HH:mm - HH:mm` form.
    pub slots: Vec<String>,
}

impl ReserveOptions {
    /// Creates booking options.
    #[must_use]
    pub fn new(
        user_email: impl Into<String>,
        room_id: impl Into<String>,
        date: impl Into<String>,
        slots: Vec<String>,
    ) -> Self {
        Self {
            user_email: user_email.into(),
            room_id: room_id.into(),
            date: date.into(),
            slots,
        }
    }
}

/// Operations for creating, listing, and cancelling reservations.
pub struct BookingOperations;

impl BookingOperations {
    /// Books the requested slots for a user in a room on a date.
    ///
    /// Returns the created reservations in request order, each carrying the
    /// room's name and capacity for display.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if a required field is empty or no slots were
    ///   requested
    /// - [`Error::InvalidDate`] / [`Error::InvalidSlot`] if the date or any
    ///   slot string is malformed
    /// - [`Error::NotFound`] if the user email or room id does not resolve
    /// - [`Error::Conflict`] if any requested slot overlaps an existing
    ///   reservation or another slot in the same request
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle::database::{Database, DatabaseConfig};
    /// use huddle::operations::{BookingOperations, ReserveOptions};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/huddle.db")).unwrap();
    /// let options = ReserveOptions::new(
    ///     "ada@example.com",
    ///     "room-1",
    ///     "06/05/2025",
    ///     vec!["09:00 - 10:00".to_string(), "10:00 - 11:00".to_string()],
    /// );
    ///
    /// let created = BookingOperations::reserve(&mut db, &options).unwrap();
    /// for view in created {
    ///     println!("{} {} in {}", view.date, view.slot, view.room.name);
    /// }
    /// ```
    pub fn reserve(db: &mut Database, options: &ReserveOptions) -> Result<Vec<ReservationView>> {
        // Step 1: Validate required fields
        let user_email = options.user_email.trim();
        if user_email.is_empty() {
            return Err(Error::Validation {
                field: "user_email".into(),
                message: "cannot be empty".into(),
            });
        }
        let room_id = options.room_id.trim();
        if room_id.is_empty() {
            return Err(Error::Validation {
                field: "room_id".into(),
                message: "cannot be empty".into(),
            });
        }
        if options.slots.is_empty() {
            return Err(Error::Validation {
                field: "slots".into(),
                message: "at least one slot is required".into(),
            });
        }

        // Step 2: Parse the date and every slot before touching the database
        let date = ReservationDate::parse(&options.date)?;
        let mut slots = Vec::with_capacity(options.slots.len());
        for raw in &options.slots {
            slots.push(Slot::parse(raw)?);
        }

        // Step 3: Requested slots must not overlap each other
        for (i, a) in slots.iter().enumerate() {
            for b in &slots[i + 1..] {
                if a.overlaps(b) {
                    return Err(Error::Conflict {
                        entity: "reservation".into(),
                        details: format!("requested slots {a} and {b} overlap"),
                    });
                }
            }
        }

        // Step 4: Resolve, check against committed rows, and insert, all
        // inside one transaction
        let tx = db.begin_transaction()?;

        let user = Database::get_user_by_email(&tx, user_email)?.ok_or_else(|| {
            Error::NotFound {
                resource: format!("user '{user_email}'"),
            }
        })?;
        let room = Database::get_room(&tx, room_id)?.ok_or_else(|| Error::NotFound {
            resource: format!("room '{room_id}'"),
        })?;

        let mut created = Vec::with_capacity(slots.len());
        for slot in slots {
            if let Some(existing) =
                Database::find_overlapping_reservation(&tx, room.id(), date, slot)?
            {
                return Err(Error::Conflict {
                    entity: "reservation".into(),
                    details: format!(
                        "slot {slot} on {date} overlaps existing reservation {}",
                        existing.slot()
                    ),
                });
            }

            let reservation = Reservation::new(
                uuid::Uuid::new_v4().to_string(),
                user.id(),
                room.id(),
                date,
                slot,
            );
            Database::create_reservation_simple(&tx, &reservation)?;
            created.push(ReservationView::new(&reservation, &room));
        }

        tx.commit()?;
        log::debug!(
            "booked {} slot(s) in room '{}' on {date}",
            created.len(),
            room.name()
        );

        Ok(created)
    }

    /// Lists a user's reservations, ordered by date then start time.
    ///
    /// The views carry room details but never the owning user's internal
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the user email does not resolve, or a
    /// database error if the query fails.
    pub fn list_reservations(db: &Database, user_email: &str) -> Result<Vec<ReservationView>> {
        let user_email = user_email.trim();
        let conn = db.connection();

        let user = Database::get_user_by_email(conn, user_email)?.ok_or_else(|| {
            Error::NotFound {
                resource: format!("user '{user_email}'"),
            }
        })?;

        Database::list_reservation_views(conn, user.id())
    }

    /// Cancels a reservation on behalf of its owner and returns the deleted
    /// record.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the reservation id or requester email does
    ///   not resolve
    /// - [`Error::Forbidden`] if the requester is not the reservation's
    ///   owner
    pub fn cancel(
        db: &mut Database,
        reservation_id: &str,
        requester_email: &str,
    ) -> Result<Reservation> {
        let requester_email = requester_email.trim();
        let tx = db.begin_transaction()?;

        let reservation =
            Database::get_reservation(&tx, reservation_id)?.ok_or_else(|| Error::NotFound {
                resource: format!("reservation '{reservation_id}'"),
            })?;
        let requester = Database::get_user_by_email(&tx, requester_email)?.ok_or_else(|| {
            Error::NotFound {
                resource: format!("user '{requester_email}'"),
            }
        })?;

        if requester.id() != reservation.user_id() {
            return Err(Error::Forbidden {
                action: format!("cancel reservation '{reservation_id}' owned by another user"),
            });
        }

        Database::delete_reservation_simple(&tx, reservation.id())?;
        tx.commit()?;
        log::debug!("cancelled reservation '{reservation_id}'");

        Ok(reservation)
    }
}
