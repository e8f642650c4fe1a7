//! Transaction management utilities.
//!
//! This module provides transaction helpers for compound database
//! operations: the explicit entry point for multi-statement transactions and
//! the per-table steps of the company and room deletion cascades. Foreign
//! keys are enforced, so the steps only commit when run in dependency order
//! (reservations before rooms, rooms before the company row, and employees
//! detached before the company row goes away).

use rusqlite::{params, Connection, Transaction, TransactionBehavior};

use crate::error::Result;

use super::connection::Database;

// SQL for the cascade steps over a company's subgraph
const DETACH_COMPANY_USERS: &str = r"
    UPDATE users
    SET company_id = NULL
    WHERE company_id = ?1
";

const DELETE_COMPANY_RESERVATIONS: &str = r"
    DELETE FROM reservations
    WHERE room_id IN (SELECT id FROM rooms WHERE company_id = ?1)
";

const SELECT_COMPANY_IMAGE_URLS: &str = r"
    SELECT image_url
    FROM rooms
    WHERE company_id = ?1 AND image_url IS NOT NULL
";

const DELETE_COMPANY_ROOMS: &str = r"
    DELETE FROM rooms
    WHERE company_id = ?1
";

const DELETE_ROOM_RESERVATIONS: &str = r"
    DELETE FROM reservations
    WHERE room_id = ?1
";

impl Database {
    /// Begins a write transaction with IMMEDIATE mode.
    ///
    /// IMMEDIATE mode takes the write lock up front, so every read inside
    /// the transaction sees a state no competing writer can change before
    /// the commit. Dropping the returned transaction without committing
    /// rolls back all of its statements.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, including
    /// when the write lock cannot be acquired within the busy timeout.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle::database::{Database, DatabaseConfig};
    ///
    /// let config = DatabaseConfig::new("/tmp/huddle.db");
    /// let mut db = Database::open(config).unwrap();
    ///
    /// let tx = db.begin_transaction().unwrap();
    /// let user = Database::get_user_by_email(&tx, "ada@example.com").unwrap();
    /// tx.commit().unwrap();
    /// ```
    pub fn begin_transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?)
    }

    /// Detaches every employee of a company (without creating a transaction).
    ///
    /// The user rows themselves survive; only their company link is
    /// cleared. This must happen before the company row is deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    ///
    /// # Returns
    ///
    /// The number of users detached.
    pub fn detach_company_users_simple(conn: &Connection, company_id: &str) -> Result<usize> {
        let rows_affected = conn.execute(DETACH_COMPANY_USERS, params![company_id])?;
        Ok(rows_affected)
    }

    /// Deletes every reservation in a company's rooms (without creating a
    /// transaction).
    ///
    /// This must happen before the rooms are deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database deletion fails.
    ///
    /// # Returns
    ///
    /// The number of reservations removed.
    pub fn delete_company_reservations_simple(
        conn: &Connection,
        company_id: &str,
    ) -> Result<usize> {
        let rows_affected = conn.execute(DELETE_COMPANY_RESERVATIONS, params![company_id])?;
        Ok(rows_affected)
    }

    /// Collects the image URLs attached to a company's rooms.
    ///
    /// The URLs are gathered before the rooms are deleted so the object
    /// store can be told to release the images after the commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn collect_company_image_urls(conn: &Connection, company_id: &str) -> Result<Vec<String>> {
        let mut stmt = conn.prepare(SELECT_COMPANY_IMAGE_URLS)?;

        let urls = stmt
            .query_map(params![company_id], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(urls)
    }

    /// Deletes every room of a company (without creating a transaction).
    ///
    /// This must happen after the rooms' reservations are gone and before
    /// the company row is deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database deletion fails.
    ///
    /// # Returns
    ///
    /// The number of rooms removed.
    pub fn delete_company_rooms_simple(conn: &Connection, company_id: &str) -> Result<usize> {
        let rows_affected = conn.execute(DELETE_COMPANY_ROOMS, params![company_id])?;
        Ok(rows_affected)
    }

    /// Deletes every reservation in one room (without creating a
    /// transaction).
    ///
    /// This must happen before the room row is deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database deletion fails.
    ///
    /// # Returns
    ///
    /// The number of reservations removed.
    pub fn delete_room_reservations_simple(conn: &Connection, room_id: &str) -> Result<usize> {
        let rows_affected = conn.execute(DELETE_ROOM_RESERVATIONS, params![room_id])?;
        Ok(rows_affected)
    }
}
