//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use tempfile::tempdir;
use uuid::Uuid;

use crate::database::{Database, DatabaseConfig};
use crate::timeslot::{ReservationDate, Slot};
use crate::{Company, Reservation, Room, User};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a test user with the given email and a fresh identifier.
///
/// # Panics
///
/// Panics if the email fails validation.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_user(email: &str) -> User {
    User::builder(Uuid::new_v4().to_string(), email)
        .build()
        .unwrap()
}

/// Creates a test company owned by the given creator.
///
/// # Panics
///
/// Panics if the name fails validation.
#[must_use]
pub fn create_test_company(name: &str, creator_id: &str) -> Company {
    Company::new(Uuid::new_v4().to_string(), name, creator_id).unwrap()
}

/// Creates a test room with an eight-seat capacity.
///
/// # Panics
///
/// Panics if the name fails validation.
#[must_use]
pub fn create_test_room(company_id: &str, name: &str) -> Room {
    Room::builder(Uuid::new_v4().to_string(), company_id, name, 8)
        .build()
        .unwrap()
}

/// Creates a test reservation from wire-format date and slot strings.
///
/// # Panics
///
/// Panics if the date or slot cannot be parsed.
#[must_use]
pub fn create_test_reservation(user_id: &str, room_id: &str, date: &str, slot: &str) -> Reservation {
    Reservation::new(
        Uuid::new_v4().to_string(),
        user_id,
        room_id,
        ReservationDate::parse(date).unwrap(),
        Slot::parse(slot).unwrap(),
    )
}
