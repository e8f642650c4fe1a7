//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the huddle reservation system.
//!
//! Reservation dates are stored as ISO `YYYY-MM-DD` text and times as
//! 24-hour `HH:MM` text, so SQLite string comparison on these columns is
//! chronological. The wire formats (`DD/MM/YYYY`, `HH:mm`) live entirely in
//! the type layer.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the users table.
///
/// Users are identified by an opaque id and a unique email. The
/// `company_id` column is the nullable membership edge: a user belongs to
/// at most one company at a time, and is detached (set to NULL) when that
/// company is deleted.
pub const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY NOT NULL,
        email TEXT NOT NULL UNIQUE,
        given_name TEXT,
        family_name TEXT,
        company_id TEXT REFERENCES companies(id)
    )";

/// SQL statement to create the companies table.
///
/// Company names are globally unique (case-sensitive as stored). The
/// creator is immutable after creation and is the only user allowed to
/// manage employees or delete the company.
pub const CREATE_COMPANIES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS companies (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL UNIQUE,
        creator_id TEXT NOT NULL REFERENCES users(id)
    )";

/// SQL statement to create the rooms table.
///
/// Each room belongs to exactly one company. `image_url` is NULL while the
/// room is in its image-pending state (record created, image not yet
/// attached).
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        id TEXT PRIMARY KEY NOT NULL,
        company_id TEXT NOT NULL REFERENCES companies(id),
        name TEXT NOT NULL,
        capacity INTEGER NOT NULL,
        description TEXT,
        image_url TEXT
    )";

/// SQL statement to create the reservations table.
///
/// A reservation is jointly referenced by a user and a room but owned by
/// neither. `reservation_date` is ISO `YYYY-MM-DD` and the time columns
/// are `HH:MM`, so range comparisons in SQL are calendar-correct.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id TEXT PRIMARY KEY NOT NULL,
        user_id TEXT NOT NULL REFERENCES users(id),
        room_id TEXT NOT NULL REFERENCES rooms(id),
        reservation_date TEXT NOT NULL,
        start_time TEXT NOT NULL,
        end_time TEXT NOT NULL
    )";

/// SQL statement to create an index on reservations (room, date).
///
/// This index speeds up the overlap check performed inside every booking
/// transaction.
pub const CREATE_ROOM_DATE_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_reservations_room_date
    ON reservations(room_id, reservation_date)";

/// SQL statement to create an index on the reservation owner.
///
/// This index speeds up per-user listing.
pub const CREATE_RESERVATION_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_user ON reservations(user_id)";

/// SQL statement to create an index on (date, `end_time`).
///
/// This index speeds up sweep passes that search for elapsed reservations.
pub const CREATE_RESERVATION_DATE_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_reservations_date
    ON reservations(reservation_date, end_time)";

/// SQL statement to create an index on the user membership edge.
///
/// This index speeds up detaching all members when a company is deleted.
pub const CREATE_USER_COMPANY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_users_company ON users(company_id)";

/// SQL statement to create an index on room ownership.
///
/// This index speeds up per-company room listing and cascade deletes.
pub const CREATE_ROOM_COMPANY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_rooms_company ON rooms(company_id)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a reservation.
///
/// Used by both single and batch create operations.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (id, user_id, room_id, reservation_date, start_time, end_time)
    VALUES (?, ?, ?, ?, ?, ?)
";

/// SQL statement to delete a reservation by id.
///
/// Used by both single and batch delete operations.
pub const DELETE_RESERVATION: &str = r"
    DELETE FROM reservations
    WHERE id = ?
";
