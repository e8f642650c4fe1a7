//! Reservation types for tracking room bookings.
//!
//! This module provides the booked-slot record stored per reservation, the
//! caller-facing view returned by listings, and the validation error type
//! shared by entity constructors.

use serde::{Deserialize, Serialize};

use crate::entities::Room;
use crate::timeslot::{ReservationDate, Slot, SlotTime};

/// A single booked slot in a room.
///
/// A multi-slot booking request produces one reservation row per slot, all
/// created in the same transaction. Each reservation is owned by the user
/// who made it.
///
/// # Examples
///
/// ```
/// use huddle::{Reservation, ReservationDate, Slot};
///
/// let date = ReservationDate::parse("06/05/2025").unwrap();
/// let slot = Slot::parse("09:00 - 10:00").unwrap();
/// let reservation = Reservation::new("b-1", "u-1", "r-1", date, slot);
///
/// assert_eq!(reservation.room_id(), "r-1");
/// assert_eq!(format!("{}", reservation.slot()), "09:00 - 10:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: String,
    user_id: String,
    room_id: String,
    date: ReservationDate,
    slot: Slot,
}

impl Reservation {
    /// Creates a new reservation.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        room_id: impl Into<String>,
        date: ReservationDate,
        slot: Slot,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            room_id: room_id.into(),
            date,
            slot,
        }
    }

    /// Returns the reservation's unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the identifier of the user who owns the reservation.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the identifier of the booked room.
    #[must_use]
    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    /// Returns the reservation's calendar date.
    #[must_use]
    pub const fn date(&self) -> ReservationDate {
        self.date
    }

    /// Returns the booked time slot.
    #[must_use]
    pub const fn slot(&self) -> Slot {
        self.slot
    }

    /// Checks if the reservation has expired as of the given instant.
    ///
    /// A reservation is expired once its date is past, or its date is today
    /// and its slot ended strictly before the current time. A slot ending
    /// exactly now is not yet expired.
    ///
    /// # Examples
    ///
    /// ```
    /// use huddle::{Reservation, ReservationDate, Slot, SlotTime};
    ///
    /// let date = ReservationDate::parse("06/05/2025").unwrap();
    /// let slot = Slot::parse("09:00 - 10:00").unwrap();
    /// let reservation = Reservation::new("b-1", "u-1", "r-1", date, slot);
    ///
    /// let noon = SlotTime::parse("12:00").unwrap();
    /// assert!(reservation.is_expired(ReservationDate::parse("07/05/2025").unwrap(), noon));
    /// assert!(reservation.is_expired(date, noon));
    /// assert!(!reservation.is_expired(date, SlotTime::parse("09:30").unwrap()));
    /// ```
    #[must_use]
    pub fn is_expired(&self, now_date: ReservationDate, now_time: SlotTime) -> bool {
        self.date < now_date || (self.date == now_date && self.slot.end() < now_time)
    }
}

/// A reservation as returned to the caller who listed it.
///
/// The view carries the booked room's details instead of raw identifiers and
/// deliberately omits the owning user: listings are always scoped to one
/// user, so echoing their identifier back would only leak it into output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationView {
    /// The reservation's unique identifier, used for cancellation.
    pub id: String,
    /// The reservation's calendar date.
    pub date: ReservationDate,
    /// The booked time slot.
    pub slot: Slot,
    /// The booked room.
    pub room: RoomSummary,
}

impl ReservationView {
    /// Creates a view of a reservation joined with its room.
    #[must_use]
    pub fn new(reservation: &Reservation, room: &Room) -> Self {
        Self {
            id: reservation.id().to_string(),
            date: reservation.date(),
            slot: reservation.slot(),
            room: RoomSummary::from(room),
        }
    }
}

/// The subset of room details included in a reservation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    /// The room's unique identifier.
    pub id: String,
    /// The room's name.
    pub name: String,
    /// The number of seats in the room.
    pub capacity: u32,
}

impl From<&Room> for RoomSummary {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id().to_string(),
            name: room.name().to_string(),
            capacity: room.capacity(),
        }
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
