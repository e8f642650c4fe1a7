//! Reservation lifecycle operations.
//!
//! This module provides the high-level operations of the booking system:
//! user registration, company and employee management, room administration,
//! slot booking and cancellation, and expired-reservation sweeping.
//!
//! # Architecture
//!
//! Each operation validates its input, then runs all of its reads and writes
//! inside a single immediate transaction so that multi-row changes (multi-slot
//! bookings, company cascades) land atomically or not at all. Object store
//! calls happen after the transaction commits; a failed release never rolls
//! back a committed delete.
//!
//! # Examples
//!
//! ```no_run
//! use huddle::operations::{BookingOperations, RegisterOperations, RegisterOptions, ReserveOptions};
//! use huddle::{Database, DatabaseConfig};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/huddle.db")).unwrap();
//!
//! // Register the user, then book two back-to-back slots
//! RegisterOperations::register(&mut db, &RegisterOptions::new("ada@example.com")).unwrap();
//!
//! let options = ReserveOptions::new(
//!     "ada@example.com",
//!     "room-1",
//!     "06/05/2025",
//!     vec!["09:00 - 10:00".to_string(), "10:00 - 11:00".to_string()],
//! );
//! let booked = BookingOperations::reserve(&mut db, &options).unwrap();
//! println!("booked {} slots", booked.len());
//! ```

pub mod booking;
pub mod init;
pub mod membership;
pub mod register;
pub mod rooms;
pub mod sweep;

pub use booking::{BookingOperations, ReserveOptions};
pub use init::{init_database, InitOptions, InitResult};
pub use membership::{DeleteCompanyResult, EmployeeOptions, MembershipOperations};
pub use register::{RegisterOperations, RegisterOptions, RegisterResult};
pub use rooms::{CreateRoomOptions, DeleteRoomResult, RoomListing, RoomOperations};
pub use sweep::{SweepOperations, SweepResult};
