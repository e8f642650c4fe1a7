//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the huddle library.

pub mod database;

use huddle::{Reservation, ReservationDate, Slot};
use uuid::Uuid;

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Builder for creating test reservations with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::ReservationFixture;
/// let reservation = ReservationFixture::new()
///     .with_room("room-2")
///     .with_slot("14:00 - 15:00")
///     .build();
/// ```
#[allow(dead_code)]
pub struct ReservationFixture {
    user_id: String,
    room_id: String,
    date: String,
    slot: String,
}

#[allow(dead_code)]
impl ReservationFixture {
    /// Creates a new fixture builder with default values.
    ///
    /// Defaults:
    /// - user: "user-1"
    /// - room: "room-1"
    /// - date: "06/05/2025"
    /// - slot: "09:00 - 10:00"
    pub fn new() -> Self {
        Self {
            user_id: "user-1".to_string(),
            room_id: "room-1".to_string(),
            date: "06/05/2025".to_string(),
            slot: "09:00 - 10:00".to_string(),
        }
    }

    /// Sets the owning user id.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the booked room id.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = room_id.into();
        self
    }

    /// Sets the reservation date (wire format, DD/MM/YYYY).
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Sets the booked slot (wire format, "HH:mm - HH:mm").
    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = slot.into();
        self
    }

    /// Builds the reservation.
    ///
    /// # Panics
    ///
    /// Panics if the date or slot strings cannot be parsed. This is
    /// acceptable in test code where we want to fail fast on invalid
    /// fixtures.
    pub fn build(self) -> Reservation {
        let date = ReservationDate::parse(&self.date).expect("fixture should have a valid date");
        let slot = Slot::parse(&self.slot).expect("fixture should have a valid slot");

        Reservation::new(
            Uuid::new_v4().to_string(),
            self.user_id,
            self.room_id,
            date,
            slot,
        )
    }
}

impl Default for ReservationFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_default() {
        let reservation = ReservationFixture::new().build();
        assert_eq!(reservation.user_id(), "user-1");
        assert_eq!(reservation.room_id(), "room-1");
        assert_eq!(reservation.date().to_string(), "06/05/2025");
        assert_eq!(reservation.slot().to_string(), "09:00 - 10:00");
    }

    #[test]
    fn test_fixture_custom() {
        let reservation = ReservationFixture::new()
            .with_user("user-9")
            .with_room("room-9")
            .with_date("31/01/2025")
            .with_slot("14:00 - 15:30")
            .build();

        assert_eq!(reservation.user_id(), "user-9");
        assert_eq!(reservation.room_id(), "room-9");
        assert_eq!(reservation.date().to_string(), "31/01/2025");
        assert_eq!(reservation.slot().to_string(), "14:00 - 15:30");
    }

    #[test]
    fn test_temp_dir_creation() {
        let temp_dir = create_temp_dir().expect("should create temp dir");
        assert!(temp_dir.path().exists());
    }
}
