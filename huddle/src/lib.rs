#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # huddle
//!
//! A library for managing meeting room reservations.
//!
//! This library covers the reservation lifecycle of a room booking system:
//! user registration, company membership, room administration, atomic
//! multi-slot booking, and expired-reservation sweeping, backed by SQLite.
//!
//! ## Core Types
//!
//! - [`User`], [`Company`] and [`Room`]: the entity graph
//! - [`Reservation`] and [`ReservationView`]: booked slots and their user-facing projection
//! - [`ReservationDate`], [`SlotTime`] and [`Slot`]: calendar dates and half-open time ranges
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use huddle::{ReservationDate, Slot};
//!
//! // Wire dates are DD/MM/YYYY
//! let date = ReservationDate::parse("06/05/2025").unwrap();
//! assert_eq!(date.to_string(), "06/05/2025");
//!
//! // Slots are half-open ranges: back-to-back slots do not overlap
//! let morning = Slot::parse("09:00 - 10:00").unwrap();
//! let next = Slot::parse("10:00 - 11:00").unwrap();
//! assert!(!morning.overlaps(&next));
//! ```

pub mod config;
pub mod database;
pub mod entities;
pub mod error;
pub mod logging;
pub mod object_store;
pub mod operations;
pub mod reservation;
pub mod timeslot;

// Re-export key types at crate root for convenience
pub use config::Config;
pub use database::{Database, DatabaseConfig};
pub use entities::{Company, Room, User};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use object_store::{NoopObjectStore, ObjectStore};
pub use reservation::{Reservation, ReservationView, RoomSummary, ValidationError};
pub use timeslot::{ReservationDate, Slot, SlotTime};
