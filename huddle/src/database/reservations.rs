//! Database CRUD operations for reservations.
//!
//! Dates are stored as ISO `YYYY-MM-DD` text and times as zero-padded
//! `HH:MM` text, so the comparisons in the overlap and expiry queries are
//! chronological even though SQLite compares them as strings.

use rusqlite::{params, Connection, TransactionBehavior};

use crate::error::Result;
use crate::reservation::{Reservation, ReservationView, RoomSummary};
use crate::timeslot::{ReservationDate, Slot, SlotTime};

use super::connection::Database;
use super::schema::{DELETE_RESERVATION, INSERT_RESERVATION};

/// Helper function to deserialize a reservation from a database row.
///
/// Expects row fields in this order: id, `user_id`, `room_id`,
/// `reservation_date`, `start_time`, `end_time`
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: String = row.get(0)?;
    let user_id: String = row.get(1)?;
    let room_id: String = row.get(2)?;
    let date_text: String = row.get(3)?;
    let start_text: String = row.get(4)?;
    let end_text: String = row.get(5)?;

    let date = ReservationDate::from_storage(&date_text)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let start = SlotTime::parse(&start_text)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let end = SlotTime::parse(&end_text)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let slot =
        Slot::new(start, end).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Ok(Reservation::new(id, user_id, room_id, date, slot))
}

/// Helper function to deserialize a reservation view from a joined row.
///
/// Expects row fields in this order: id, `reservation_date`, `start_time`,
/// `end_time`, room id, room name, room capacity
fn row_to_view(row: &rusqlite::Row<'_>) -> rusqlite::Result<ReservationView> {
    let id: String = row.get(0)?;
    let date_text: String = row.get(1)?;
    let start_text: String = row.get(2)?;
    let end_text: String = row.get(3)?;
    let room_id: String = row.get(4)?;
    let room_name: String = row.get(5)?;
    let room_capacity: u32 = row.get(6)?;

    let date = ReservationDate::from_storage(&date_text)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let start = SlotTime::parse(&start_text)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let end = SlotTime::parse(&end_text)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let slot =
        Slot::new(start, end).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Ok(ReservationView {
        id,
        date,
        slot,
        room: RoomSummary {
            id: room_id,
            name: room_name,
            capacity: room_capacity,
        },
    })
}

// SQL statements for CRUD operations
const SELECT_RESERVATION_BY_ID: &str = r"
    SELECT id, user_id, room_id, reservation_date, start_time, end_time
    FROM reservations
    WHERE id = ?1
";

// Half-open ranges: an existing slot conflicts when it starts before the
// probe ends and ends after the probe starts.
const SELECT_OVERLAPPING: &str = r"
    SELECT id, user_id, room_id, reservation_date, start_time, end_time
    FROM reservations
    WHERE room_id = ?1
      AND reservation_date = ?2
      AND start_time < ?3
      AND end_time > ?4
    ORDER BY start_time
    LIMIT 1
";

const SELECT_VIEWS_BY_USER: &str = r"
    SELECT r.id, r.reservation_date, r.start_time, r.end_time,
           m.id, m.name, m.capacity
    FROM reservations r
    JOIN rooms m ON m.id = r.room_id
    WHERE r.user_id = ?1
    ORDER BY r.reservation_date, r.start_time
";

const SELECT_EXPIRED: &str = r"
    SELECT id, user_id, room_id, reservation_date, start_time, end_time
    FROM reservations
    WHERE reservation_date < ?1
       OR (reservation_date = ?1 AND end_time < ?2)
    ORDER BY reservation_date, start_time
";

const DELETE_EXPIRED: &str = r"
    DELETE FROM reservations
    WHERE reservation_date < ?1
       OR (reservation_date = ?1 AND end_time < ?2)
";

impl Database {
    /// Creates a reservation in the database.
    ///
    /// This operation uses a transaction with IMMEDIATE mode to ensure
    /// atomicity and prevent conflicts. Multi-slot bookings should not use
    /// this method; they insert every slot through
    /// `create_reservation_simple` inside one transaction instead.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction cannot be started
    /// - The insert fails, including when the user or room does not exist
    /// - The transaction cannot be committed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle::database::{Database, DatabaseConfig};
    /// use huddle::{Reservation, ReservationDate, Slot};
    ///
    /// let config = DatabaseConfig::new("/tmp/huddle.db");
    /// let mut db = Database::open(config).unwrap();
    ///
    /// let reservation = Reservation::new(
    ///     "b-1",
    ///     "u-1",
    ///     "r-1",
    ///     ReservationDate::parse("06/05/2025").unwrap(),
    ///     Slot::parse("09:00 - 10:00").unwrap(),
    /// );
    /// db.create_reservation(&reservation).unwrap();
    /// ```
    pub fn create_reservation(&mut self, reservation: &Reservation) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            INSERT_RESERVATION,
            params![
                reservation.id(),
                reservation.user_id(),
                reservation.room_id(),
                reservation.date().storage_key(),
                reservation.slot().start().to_string(),
                reservation.slot().end().to_string(),
            ],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Creates a reservation using an existing connection or transaction.
    ///
    /// This method is intended for use within an existing transaction context.
    /// Unlike `create_reservation`, it does not create its own transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_reservation_simple(conn: &Connection, reservation: &Reservation) -> Result<()> {
        conn.execute(
            INSERT_RESERVATION,
            params![
                reservation.id(),
                reservation.user_id(),
                reservation.room_id(),
                reservation.date().storage_key(),
                reservation.slot().start().to_string(),
                reservation.slot().end().to_string(),
            ],
        )?;

        Ok(())
    }

    /// Retrieves a reservation by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(reservation))` if the reservation exists
    /// - `Ok(None)` if the reservation doesn't exist
    /// - `Err(_)` if a database error occurs
    pub fn get_reservation(conn: &Connection, id: &str) -> Result<Option<Reservation>> {
        let mut stmt = conn.prepare(SELECT_RESERVATION_BY_ID)?;

        match stmt.query_row(params![id], row_to_reservation) {
            Ok(reservation) => Ok(Some(reservation)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Finds a reservation that overlaps the given slot in a room on a date.
    ///
    /// Slots are half-open ranges, so a reservation ending exactly when the
    /// probe starts is not a conflict. When several reservations overlap,
    /// the earliest-starting one is returned.
    ///
    /// This query runs inside the booking transaction, where the IMMEDIATE
    /// write lock guarantees no competing booking commits between the check
    /// and the insert.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_overlapping_reservation(
        conn: &Connection,
        room_id: &str,
        date: ReservationDate,
        slot: Slot,
    ) -> Result<Option<Reservation>> {
        let mut stmt = conn.prepare(SELECT_OVERLAPPING)?;

        match stmt.query_row(
            params![
                room_id,
                date.storage_key(),
                slot.end().to_string(),
                slot.start().to_string(),
            ],
            row_to_reservation,
        ) {
            Ok(reservation) => Ok(Some(reservation)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists a user's reservations joined with room details.
    ///
    /// Results are ordered by date, then start time; the stored formats make
    /// the SQL ordering chronological.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or if any row cannot be
    /// deserialized.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle::database::{Database, DatabaseConfig};
    ///
    /// let config = DatabaseConfig::new("/tmp/huddle.db");
    /// let db = Database::open(config).unwrap();
    ///
    /// let views = Database::list_reservation_views(db.connection(), "u-1").unwrap();
    /// for view in views {
    ///     println!("{} {} in {}", view.date, view.slot, view.room.name);
    /// }
    /// ```
    pub fn list_reservation_views(conn: &Connection, user_id: &str) -> Result<Vec<ReservationView>> {
        let mut stmt = conn.prepare(SELECT_VIEWS_BY_USER)?;

        let views = stmt
            .query_map(params![user_id], row_to_view)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(views)
    }

    /// Deletes a reservation from the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or delete fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation was found and deleted
    /// - `Ok(false)` if the reservation was not found
    pub fn delete_reservation(&mut self, id: &str) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows_affected = tx.execute(DELETE_RESERVATION, params![id])?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }

    /// Deletes a reservation (without creating a transaction).
    ///
    /// This method is intended for use within an existing transaction.
    /// For standalone use, use `delete_reservation` instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the database deletion fails.
    pub fn delete_reservation_simple(conn: &Connection, id: &str) -> Result<bool> {
        let rows_affected = conn.execute(DELETE_RESERVATION, params![id])?;
        Ok(rows_affected > 0)
    }

    /// Lists reservations that have expired as of the given instant.
    ///
    /// A reservation is expired once its date is past, or its date is today
    /// and its slot ended strictly before the current time. Results are
    /// ordered by date, then start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or if any row cannot be
    /// deserialized.
    pub fn list_expired_reservations(
        conn: &Connection,
        now_date: ReservationDate,
        now_time: SlotTime,
    ) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(SELECT_EXPIRED)?;

        let reservations = stmt
            .query_map(
                params![now_date.storage_key(), now_time.to_string()],
                row_to_reservation,
            )?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(reservations)
    }

    /// Deletes expired reservations (without creating a transaction).
    ///
    /// This method is intended for use within the sweep transaction. Running
    /// it again with the same instant removes nothing further.
    ///
    /// # Errors
    ///
    /// Returns an error if the database deletion fails.
    ///
    /// # Returns
    ///
    /// The number of reservations removed.
    pub fn delete_expired_reservations_simple(
        conn: &Connection,
        now_date: ReservationDate,
        now_time: SlotTime,
    ) -> Result<usize> {
        let rows_affected = conn.execute(
            DELETE_EXPIRED,
            params![now_date.storage_key(), now_time.to_string()],
        )?;
        Ok(rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{
        create_test_company, create_test_database, create_test_reservation, create_test_room,
        create_test_user,
    };

    /// Seeds a user, company, and room; returns (`user_id`, `room_id`).
    fn seeded_graph(db: &mut Database) -> (String, String) {
        let user = create_test_user("ada@example.com");
        db.create_user(&user).unwrap();
        let company = create_test_company("Initech", user.id());
        db.create_company(&company).unwrap();
        let room = create_test_room(company.id(), "War Room");
        db.create_room(&room).unwrap();
        (user.id().to_string(), room.id().to_string())
    }

    #[test]
    fn test_create_reservation_round_trip() {
        let mut db = create_test_database();
        let (user_id, room_id) = seeded_graph(&mut db);

        let reservation = create_test_reservation(&user_id, &room_id, "06/05/2025", "09:00 - 10:00");
        db.create_reservation(&reservation).unwrap();

        let loaded = Database::get_reservation(db.connection(), reservation.id())
            .unwrap()
            .unwrap();
        assert_eq!(loaded, reservation);
        assert_eq!(format!("{}", loaded.date()), "06/05/2025");
        assert_eq!(format!("{}", loaded.slot()), "09:00 - 10:00");
    }

    #[test]
    fn test_get_reservation_not_found() {
        let db = create_test_database();
        let result = Database::get_reservation(db.connection(), "nonexistent").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_create_reservation_rejects_unknown_room() {
        let mut db = create_test_database();
        let user = create_test_user("ada@example.com");
        db.create_user(&user).unwrap();

        let reservation =
            create_test_reservation(user.id(), "nonexistent", "06/05/2025", "09:00 - 10:00");
        assert!(db.create_reservation(&reservation).is_err());
    }

    #[test]
    fn test_find_overlapping_reservation() {
        let mut db = create_test_database();
        let (user_id, room_id) = seeded_graph(&mut db);
        let existing = create_test_reservation(&user_id, &room_id, "06/05/2025", "09:00 - 10:00");
        db.create_reservation(&existing).unwrap();

        let date = ReservationDate::parse("06/05/2025").unwrap();
        let probe = |slot: &str| {
            Database::find_overlapping_reservation(
                db.connection(),
                &room_id,
                date,
                Slot::parse(slot).unwrap(),
            )
            .unwrap()
        };

        // Partial overlap from either side
        assert!(probe("09:30 - 10:30").is_some());
        assert!(probe("08:30 - 09:30").is_some());
        // Containment in both directions
        assert!(probe("09:15 - 09:45").is_some());
        assert!(probe("08:00 - 12:00").is_some());
        // Half-open: touching slots are free
        assert!(probe("10:00 - 11:00").is_none());
        assert!(probe("08:00 - 09:00").is_none());
        // Disjoint
        assert!(probe("14:00 - 15:00").is_none());
    }

    #[test]
    fn test_find_overlapping_scoped_to_room_and_date() {
        let mut db = create_test_database();
        let (user_id, room_id) = seeded_graph(&mut db);
        let existing = create_test_reservation(&user_id, &room_id, "06/05/2025", "09:00 - 10:00");
        db.create_reservation(&existing).unwrap();

        let slot = Slot::parse("09:00 - 10:00").unwrap();

        // Same slot, different date
        let other_date = ReservationDate::parse("07/05/2025").unwrap();
        assert!(
            Database::find_overlapping_reservation(db.connection(), &room_id, other_date, slot)
                .unwrap()
                .is_none()
        );

        // Same slot and date, different room
        let company =
            Database::get_room(db.connection(), &room_id).unwrap().unwrap().company_id().to_string();
        let other_room = create_test_room(&company, "Annex");
        db.create_room(&other_room).unwrap();
        let date = ReservationDate::parse("06/05/2025").unwrap();
        assert!(Database::find_overlapping_reservation(
            db.connection(),
            other_room.id(),
            date,
            slot
        )
        .unwrap()
        .is_none());
    }

    #[test]
    fn test_list_views_ordered_by_date_then_start() {
        let mut db = create_test_database();
        let (user_id, room_id) = seeded_graph(&mut db);

        // Inserted out of order, including a pair that lexicographic
        // DD/MM/YYYY comparison would invert
        for (date, slot) in [
            ("01/02/2025", "09:00 - 10:00"),
            ("31/01/2025", "14:00 - 15:00"),
            ("31/01/2025", "09:00 - 10:00"),
        ] {
            db.create_reservation(&create_test_reservation(&user_id, &room_id, date, slot))
                .unwrap();
        }

        let views = Database::list_reservation_views(db.connection(), &user_id).unwrap();
        let order: Vec<String> = views
            .iter()
            .map(|v| format!("{} {}", v.date, v.slot))
            .collect();
        assert_eq!(
            order,
            vec![
                "31/01/2025 09:00 - 10:00",
                "31/01/2025 14:00 - 15:00",
                "01/02/2025 09:00 - 10:00",
            ]
        );
        assert_eq!(views[0].room.name, "War Room");
    }

    #[test]
    fn test_list_views_scoped_to_user() {
        let mut db = create_test_database();
        let (user_id, room_id) = seeded_graph(&mut db);
        let other = create_test_user("grace@example.com");
        db.create_user(&other).unwrap();

        db.create_reservation(&create_test_reservation(
            &user_id,
            &room_id,
            "06/05/2025",
            "09:00 - 10:00",
        ))
        .unwrap();

        let views = Database::list_reservation_views(db.connection(), other.id()).unwrap();
        assert!(views.is_empty());
    }

    #[test]
    fn test_delete_reservation() {
        let mut db = create_test_database();
        let (user_id, room_id) = seeded_graph(&mut db);
        let reservation = create_test_reservation(&user_id, &room_id, "06/05/2025", "09:00 - 10:00");
        db.create_reservation(&reservation).unwrap();

        let deleted = db.delete_reservation(reservation.id()).unwrap();
        assert!(deleted);
        assert!(Database::get_reservation(db.connection(), reservation.id())
            .unwrap()
            .is_none());

        let deleted = db.delete_reservation(reservation.id()).unwrap();
        assert!(!deleted);
    }

    #[test]
    fn test_expired_reservation_queries() {
        let mut db = create_test_database();
        let (user_id, room_id) = seeded_graph(&mut db);

        // Yesterday, earlier today, later today, tomorrow
        for (date, slot) in [
            ("05/05/2025", "09:00 - 10:00"),
            ("06/05/2025", "08:00 - 09:00"),
            ("06/05/2025", "14:00 - 15:00"),
            ("07/05/2025", "09:00 - 10:00"),
        ] {
            db.create_reservation(&create_test_reservation(&user_id, &room_id, date, slot))
                .unwrap();
        }

        let now_date = ReservationDate::parse("06/05/2025").unwrap();
        let now_time = SlotTime::parse("12:00").unwrap();

        let expired =
            Database::list_expired_reservations(db.connection(), now_date, now_time).unwrap();
        assert_eq!(expired.len(), 2);
        assert_eq!(format!("{}", expired[0].date()), "05/05/2025");
        assert_eq!(format!("{}", expired[1].slot()), "08:00 - 09:00");

        let removed =
            Database::delete_expired_reservations_simple(db.connection(), now_date, now_time)
                .unwrap();
        assert_eq!(removed, 2);

        // Nothing further to remove at the same instant
        let removed =
            Database::delete_expired_reservations_simple(db.connection(), now_date, now_time)
                .unwrap();
        assert_eq!(removed, 0);

        let views = Database::list_reservation_views(db.connection(), &user_id).unwrap();
        assert_eq!(views.len(), 2);
    }

    #[test]
    fn test_expired_boundary_cases() {
        let mut db = create_test_database();
        let (user_id, room_id) = seeded_graph(&mut db);

        // Ends exactly now: not expired yet
        db.create_reservation(&create_test_reservation(
            &user_id,
            &room_id,
            "06/05/2025",
            "09:00 - 12:00",
        ))
        .unwrap();
        // Last day of January against a February sweep instant
        db.create_reservation(&create_test_reservation(
            &user_id,
            &room_id,
            "31/01/2025",
            "09:00 - 10:00",
        ))
        .unwrap();

        let now_date = ReservationDate::parse("01/02/2025").unwrap();
        let now_time = SlotTime::parse("00:00").unwrap();
        let expired =
            Database::list_expired_reservations(db.connection(), now_date, now_time).unwrap();
        assert_eq!(expired.len(), 1);

        let now_date = ReservationDate::parse("06/05/2025").unwrap();
        let now_time = SlotTime::parse("12:00").unwrap();
        let expired =
            Database::list_expired_reservations(db.connection(), now_date, now_time).unwrap();
        // The January slot has long expired; the noon slot ends exactly now
        assert_eq!(expired.len(), 1);
    }
}
