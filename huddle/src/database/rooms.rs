//! Database CRUD operations for rooms.
//!
//! A room row is created without an image; the image URL is attached by a
//! later update once the upload has finished. A NULL `image_url` therefore
//! means "image pending", not "no image ever".

use rusqlite::{params, Connection, TransactionBehavior};

use crate::error::Result;
use crate::Room;

use super::connection::Database;

/// Helper function to deserialize a room from a database row.
///
/// Expects row fields in this order: id, `company_id`, name, capacity,
/// description, `image_url`
fn row_to_room(row: &rusqlite::Row<'_>) -> rusqlite::Result<Room> {
    let id: String = row.get(0)?;
    let company_id: String = row.get(1)?;
    let name: String = row.get(2)?;
    let capacity: u32 = row.get(3)?;
    let description: Option<String> = row.get(4)?;
    let image_url: Option<String> = row.get(5)?;

    Room::builder(id, company_id, name, capacity)
        .description(description)
        .image_url(image_url)
        .build()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

// SQL statements for CRUD operations
const INSERT_ROOM: &str = r"
    INSERT INTO rooms (id, company_id, name, capacity, description, image_url)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
";

const SELECT_ROOM_BY_ID: &str = r"
    SELECT id, company_id, name, capacity, description, image_url
    FROM rooms
    WHERE id = ?1
";

const SELECT_ROOMS_BY_COMPANY: &str = r"
    SELECT id, company_id, name, capacity, description, image_url
    FROM rooms
    WHERE company_id = ?1
    ORDER BY name
";

const UPDATE_ROOM_IMAGE: &str = r"
    UPDATE rooms
    SET image_url = ?2
    WHERE id = ?1
";

const DELETE_ROOM: &str = r"
    DELETE FROM rooms
    WHERE id = ?1
";

impl Database {
    /// Creates a room in the database.
    ///
    /// This operation uses a transaction with IMMEDIATE mode to ensure
    /// atomicity and prevent conflicts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction cannot be started
    /// - The insert fails, including when the company does not exist
    /// - The transaction cannot be committed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle::database::{Database, DatabaseConfig};
    /// use huddle::Room;
    ///
    /// let config = DatabaseConfig::new("/tmp/huddle.db");
    /// let mut db = Database::open(config).unwrap();
    ///
    /// let room = Room::builder("r-1", "c-1", "War Room", 8).build().unwrap();
    /// db.create_room(&room).unwrap();
    /// ```
    pub fn create_room(&mut self, room: &Room) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            INSERT_ROOM,
            params![
                room.id(),
                room.company_id(),
                room.name(),
                room.capacity(),
                room.description(),
                room.image_url(),
            ],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Creates a room using an existing connection or transaction.
    ///
    /// This method is intended for use within an existing transaction context.
    /// Unlike `create_room`, it does not create its own transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_room_simple(conn: &Connection, room: &Room) -> Result<()> {
        conn.execute(
            INSERT_ROOM,
            params![
                room.id(),
                room.company_id(),
                room.name(),
                room.capacity(),
                room.description(),
                room.image_url(),
            ],
        )?;

        Ok(())
    }

    /// Retrieves a room by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(room))` if the room exists
    /// - `Ok(None)` if the room doesn't exist
    /// - `Err(_)` if a database error occurs
    pub fn get_room(conn: &Connection, id: &str) -> Result<Option<Room>> {
        let mut stmt = conn.prepare(SELECT_ROOM_BY_ID)?;

        match stmt.query_row(params![id], row_to_room) {
            Ok(room) => Ok(Some(room)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists all rooms belonging to a company, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or if any room cannot be
    /// deserialized.
    pub fn list_rooms_by_company(conn: &Connection, company_id: &str) -> Result<Vec<Room>> {
        let mut stmt = conn.prepare(SELECT_ROOMS_BY_COMPANY)?;

        let rooms = stmt
            .query_map(params![company_id], row_to_room)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(rooms)
    }

    /// Sets or clears a room's image URL (without creating a transaction).
    ///
    /// This method is intended for use within an existing transaction, where
    /// the caller has already checked the room and the caller's authority
    /// over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the room was found and updated
    /// - `Ok(false)` if the room was not found
    pub fn set_room_image_simple(
        conn: &Connection,
        room_id: &str,
        image_url: Option<&str>,
    ) -> Result<bool> {
        let rows_affected = conn.execute(UPDATE_ROOM_IMAGE, params![room_id, image_url])?;
        Ok(rows_affected > 0)
    }

    /// Deletes a room row (without creating a transaction).
    ///
    /// This method is intended for use within the room-deletion transaction,
    /// after the room's reservations have been removed. Deleting the row on
    /// its own would be rejected while reservations still reference it.
    ///
    /// # Errors
    ///
    /// Returns an error if the database deletion fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the room was found and deleted
    /// - `Ok(false)` if the room was not found
    pub fn delete_room_simple(conn: &Connection, id: &str) -> Result<bool> {
        let rows_affected = conn.execute(DELETE_ROOM, params![id])?;
        Ok(rows_affected > 0)
    }
}
