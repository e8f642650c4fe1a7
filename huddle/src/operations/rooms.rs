//! Room lifecycle within a company.
//!
//! Rooms come to life in two phases: creation stores the room with an empty
//! image reference (the "image pending" state), and a later call attaches
//! the image URL once the bytes have been uploaded through the object store
//! collaborator. A failed upload therefore never leaves a broken room, only
//! one without a picture.
//!
//! Deleting a room removes the room and its reservations in one
//! transaction, then releases the image object after commit. The object
//! store is not transactional, so a failed release cannot roll the delete
//! back; the orphaned URL is reported in the result instead.
//!
//! Room management is open to anyone in the owning company, creator or
//! member alike.

use crate::database::Database;
use crate::entities::{Company, Room};
use crate::error::{Error, Result};
use crate::object_store::ObjectStore;

/// Options for creating a room.
#[derive(Debug, Clone)]
pub struct CreateRoomOptions {
    /// Identifier of the owning company.
    pub company_id: String,
    /// Email of the user creating the room.
    pub requester_email: String,
    /// Display name of the room.
    pub name: String,
    /// Seating capacity; must be at least 1.
    pub capacity: u32,
    /// Optional free-text description.
    pub description: Option<String>,
}

impl CreateRoomOptions {
    /// Creates room-creation options.
    #[must_use]
    pub fn new(
        company_id: impl Into<String>,
        requester_email: impl Into<String>,
        name: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            company_id: company_id.into(),
            requester_email: requester_email.into(),
            name: name.into(),
            capacity,
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

/// Result of deleting a room.
#[derive(Debug)]
pub struct DeleteRoomResult {
    /// The deleted room.
    pub room: Room,
    /// Number of reservations removed along with the room.
    pub removed_reservations: usize,
    /// Image URL that could not be released from the object store, if any.
    pub orphaned_image: Option<String>,
}

/// A company's rooms together with the company record.
#[derive(Debug)]
pub struct RoomListing {
    /// The owning company.
    pub company: Company,
    /// The company's rooms, ordered by name.
    pub rooms: Vec<Room>,
}

/// Operations for managing a company's rooms.
pub struct RoomOperations;

impl RoomOperations {
    /// Creates a room in the company, in the image-pending state.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the company or requester does not resolve
    /// - [`Error::Forbidden`] if the requester neither created the company
    ///   nor belongs to it
    /// - [`Error::Validation`] if the name is blank or the capacity is zero
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use huddle::database::{Database, DatabaseConfig};
    /// use huddle::operations::{CreateRoomOptions, RoomOperations};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/huddle.db")).unwrap();
    /// let options = CreateRoomOptions::new("c-1", "ada@example.com", "War Room", 8)
    ///     .with_description(Some("Corner room with the big screen".to_string()));
    ///
    /// let room = RoomOperations::create_room(&mut db, &options).unwrap();
    /// assert!(!room.has_image());
    /// ```
    pub fn create_room(db: &mut Database, options: &CreateRoomOptions) -> Result<Room> {
        let tx = db.begin_transaction()?;

        let company = require_company(&tx, &options.company_id)?;
        authorize_company_access(&tx, &company, &options.requester_email)?;

        let room = Room::builder(
            uuid::Uuid::new_v4().to_string(),
            company.id(),
            options.name.clone(),
            options.capacity,
        )
        .description(options.description.clone())
        .build()?;

        Database::create_room_simple(&tx, &room)?;
        tx.commit()?;
        log::debug!("created room '{}' in company '{}'", room.name(), company.name());

        Ok(room)
    }

    /// Attaches an uploaded image to a room, completing the second phase.
    ///
    /// The bytes must already have been uploaded through the object store;
    /// this call only records the resulting URL.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if the URL is blank
    /// - [`Error::NotFound`] if the room or requester does not resolve
    /// - [`Error::Forbidden`] if the requester neither created the owning
    ///   company nor belongs to it
    pub fn attach_room_image(
        db: &mut Database,
        room_id: &str,
        requester_email: &str,
        url: &str,
    ) -> Result<Room> {
        let url = url.trim();
        if url.is_empty() {
            return Err(Error::Validation {
                field: "image_url".into(),
                message: "cannot be empty".into(),
            });
        }

        let tx = db.begin_transaction()?;

        let room = require_room(&tx, room_id)?;
        let company = require_company(&tx, room.company_id())?;
        authorize_company_access(&tx, &company, requester_email)?;

        Database::set_room_image_simple(&tx, room.id(), Some(url))?;
        let updated = require_room(&tx, room.id())?;
        tx.commit()?;
        log::debug!("attached image to room '{}'", updated.name());

        Ok(updated)
    }

    /// Lists a company's rooms together with the company record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the company does not resolve, or a
    /// database error if the query fails.
    pub fn list_rooms(db: &Database, company_id: &str) -> Result<RoomListing> {
        let conn = db.connection();
        let company = require_company(conn, company_id)?;
        let rooms = Database::list_rooms_by_company(conn, company.id())?;

        Ok(RoomListing { company, rooms })
    }

    /// Deletes a room along with its reservations, then releases its image.
    ///
    /// The room and reservation rows go in one transaction. The image
    /// release happens after commit; if it fails, the URL is reported in
    /// the result rather than raised, since the delete itself already
    /// stuck.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the room or requester does not resolve
    /// - [`Error::Forbidden`] if the requester neither created the owning
    ///   company nor belongs to it
    pub fn delete_room(
        db: &mut Database,
        object_store: &dyn ObjectStore,
        room_id: &str,
        requester_email: &str,
    ) -> Result<DeleteRoomResult> {
        let tx = db.begin_transaction()?;

        let room = require_room(&tx, room_id)?;
        let company = require_company(&tx, room.company_id())?;
        authorize_company_access(&tx, &company, requester_email)?;

        let removed_reservations = Database::delete_room_reservations_simple(&tx, room.id())?;
        Database::delete_room_simple(&tx, room.id())?;
        tx.commit()?;
        log::debug!(
            "deleted room '{}' and {removed_reservations} reservation(s)",
            room.name()
        );

        let mut orphaned_image = None;
        if let Some(url) = room.image_url() {
            if let Err(e) = object_store.delete(url) {
                log::debug!("failed to release image '{url}': {e}");
                orphaned_image = Some(url.to_string());
            }
        }

        Ok(DeleteRoomResult {
            room,
            removed_reservations,
            orphaned_image,
        })
    }
}

/// Looks up a company, mapping absence to `NotFound`.
pub(super) fn require_company(conn: &rusqlite::Connection, company_id: &str) -> Result<Company> {
    Database::get_company(conn, company_id)?.ok_or_else(|| Error::NotFound {
        resource: format!("company '{company_id}'"),
    })
}

/// Looks up a room, mapping absence to `NotFound`.
fn require_room(conn: &rusqlite::Connection, room_id: &str) -> Result<Room> {
    Database::get_room(conn, room_id)?.ok_or_else(|| Error::NotFound {
        resource: format!("room '{room_id}'"),
    })
}

/// Checks that the requester created the company or belongs to it.
fn authorize_company_access(
    conn: &rusqlite::Connection,
    company: &Company,
    requester_email: &str,
) -> Result<()> {
    let requester_email = requester_email.trim();
    let requester =
        Database::get_user_by_email(conn, requester_email)?.ok_or_else(|| Error::NotFound {
            resource: format!("user '{requester_email}'"),
        })?;

    if requester.id() == company.creator_id() || requester.is_member_of(company.id()) {
        Ok(())
    } else {
        Err(Error::Forbidden {
            action: format!("manage rooms of company '{}'", company.name()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{
        create_test_company, create_test_database, create_test_reservation, create_test_room,
        create_test_user,
    };
    use crate::entities::User;
    use crate::object_store::MockObjectStore;

    fn seeded_company(db: &mut Database) -> (User, Company) {
        let creator = create_test_user("ada@example.com");
        db.create_user(&creator).unwrap();
        let company = create_test_company("Initech", creator.id());
        db.create_company(&company).unwrap();
        (creator, company)
    }

    fn member_of(db: &mut Database, email: &str, company_id: &str) -> User {
        let user = User::builder(uuid::Uuid::new_v4().to_string(), email)
            .company_id(Some(company_id.to_string()))
            .build()
            .unwrap();
        db.create_user(&user).unwrap();
        user
    }

    #[test]
    fn test_create_room_by_creator() {
        let mut db = create_test_database();
        let (_, company) = seeded_company(&mut db);

        let options = CreateRoomOptions::new(company.id(), "ada@example.com", "War Room", 8)
            .with_description(Some("Corner room".to_string()));
        let room = RoomOperations::create_room(&mut db, &options).unwrap();

        assert_eq!(room.name(), "War Room");
        assert_eq!(room.capacity(), 8);
        assert!(!room.has_image());

        let stored = Database::get_room(db.connection(), room.id()).unwrap().unwrap();
        assert_eq!(stored, room);
    }

    #[test]
    fn test_create_room_by_member() {
        let mut db = create_test_database();
        let (_, company) = seeded_company(&mut db);
        member_of(&mut db, "grace@example.com", company.id());

        let options = CreateRoomOptions::new(company.id(), "grace@example.com", "Annex", 4);
        RoomOperations::create_room(&mut db, &options).unwrap();
    }

    #[test]
    fn test_create_room_forbidden_for_outsider() {
        let mut db = create_test_database();
        let (_, company) = seeded_company(&mut db);
        let outsider = create_test_user("mallory@example.com");
        db.create_user(&outsider).unwrap();

        let options = CreateRoomOptions::new(company.id(), "mallory@example.com", "Annex", 4);
        let err = RoomOperations::create_room(&mut db, &options).unwrap_err();
        assert!(err.is_forbidden());
    }

    #[test]
    fn test_create_room_unknown_company() {
        let mut db = create_test_database();
        seeded_company(&mut db);

        let options = CreateRoomOptions::new("nonexistent", "ada@example.com", "Annex", 4);
        let err = RoomOperations::create_room(&mut db, &options).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_create_room_zero_capacity_rejected() {
        let mut db = create_test_database();
        let (_, company) = seeded_company(&mut db);

        let options = CreateRoomOptions::new(company.id(), "ada@example.com", "Annex", 0);
        let err = RoomOperations::create_room(&mut db, &options).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "capacity"));
    }

    #[test]
    fn test_attach_room_image() {
        let mut db = create_test_database();
        let (_, company) = seeded_company(&mut db);
        let room = create_test_room(company.id(), "War Room");
        db.create_room(&room).unwrap();

        let updated = RoomOperations::attach_room_image(
            &mut db,
            room.id(),
            "ada@example.com",
            "https://img.example.com/war-room.png",
        )
        .unwrap();

        assert_eq!(updated.image_url(), Some("https://img.example.com/war-room.png"));
        assert!(updated.has_image());
    }

    #[test]
    fn test_attach_room_image_rejects_blank_url() {
        let mut db = create_test_database();
        let (_, company) = seeded_company(&mut db);
        let room = create_test_room(company.id(), "War Room");
        db.create_room(&room).unwrap();

        let err = RoomOperations::attach_room_image(&mut db, room.id(), "ada@example.com", "  ")
            .unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "image_url"));
    }

    #[test]
    fn test_attach_room_image_unknown_room() {
        let mut db = create_test_database();
        seeded_company(&mut db);

        let err = RoomOperations::attach_room_image(
            &mut db,
            "nonexistent",
            "ada@example.com",
            "https://img.example.com/a.png",
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_attach_room_image_forbidden_for_outsider() {
        let mut db = create_test_database();
        let (_, company) = seeded_company(&mut db);
        let room = create_test_room(company.id(), "War Room");
        db.create_room(&room).unwrap();
        let outsider = create_test_user("mallory@example.com");
        db.create_user(&outsider).unwrap();

        let err = RoomOperations::attach_room_image(
            &mut db,
            room.id(),
            "mallory@example.com",
            "https://img.example.com/a.png",
        )
        .unwrap_err();
        assert!(err.is_forbidden());
    }

    #[test]
    fn test_list_rooms() {
        let mut db = create_test_database();
        let (_, company) = seeded_company(&mut db);
        for name in ["War Room", "Annex", "Fishbowl"] {
            db.create_room(&create_test_room(company.id(), name)).unwrap();
        }

        let listing = RoomOperations::list_rooms(&db, company.id()).unwrap();
        assert_eq!(listing.company.name(), "Initech");
        let names: Vec<&str> = listing.rooms.iter().map(Room::name).collect();
        assert_eq!(names, vec!["Annex", "Fishbowl", "War Room"]);
    }

    #[test]
    fn test_list_rooms_unknown_company() {
        let db = create_test_database();
        let err = RoomOperations::list_rooms(&db, "nonexistent").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_room_removes_reservations_and_releases_image() {
        let mut db = create_test_database();
        let (creator, company) = seeded_company(&mut db);
        let room = create_test_room(company.id(), "War Room");
        db.create_room(&room).unwrap();
        RoomOperations::attach_room_image(
            &mut db,
            room.id(),
            "ada@example.com",
            "https://img.example.com/war-room.png",
        )
        .unwrap();
        for slot in ["09:00 - 10:00", "10:00 - 11:00"] {
            db.create_reservation(&create_test_reservation(
                creator.id(),
                room.id(),
                "06/05/2025",
                slot,
            ))
            .unwrap();
        }

        let mut store = MockObjectStore::new();
        store
            .expect_delete()
            .withf(|url| url == "https://img.example.com/war-room.png")
            .times(1)
            .returning(|_| Ok(()));

        let result =
            RoomOperations::delete_room(&mut db, &store, room.id(), "ada@example.com").unwrap();
        assert_eq!(result.removed_reservations, 2);
        assert!(result.orphaned_image.is_none());
        assert!(Database::get_room(db.connection(), room.id())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_delete_room_without_image_skips_release() {
        let mut db = create_test_database();
        let (_, company) = seeded_company(&mut db);
        let room = create_test_room(company.id(), "War Room");
        db.create_room(&room).unwrap();

        // An unexpected store call would panic the mock
        let store = MockObjectStore::new();
        let result =
            RoomOperations::delete_room(&mut db, &store, room.id(), "ada@example.com").unwrap();
        assert_eq!(result.removed_reservations, 0);
        assert!(result.orphaned_image.is_none());
    }

    #[test]
    fn test_delete_room_reports_failed_release() {
        let mut db = create_test_database();
        let (_, company) = seeded_company(&mut db);
        let room = create_test_room(company.id(), "War Room");
        db.create_room(&room).unwrap();
        RoomOperations::attach_room_image(
            &mut db,
            room.id(),
            "ada@example.com",
            "https://img.example.com/war-room.png",
        )
        .unwrap();

        let mut store = MockObjectStore::new();
        store
            .expect_delete()
            .returning(|url| Err(Error::object_store(url, "bucket unreachable")));

        let result =
            RoomOperations::delete_room(&mut db, &store, room.id(), "ada@example.com").unwrap();
        assert_eq!(
            result.orphaned_image.as_deref(),
            Some("https://img.example.com/war-room.png")
        );
        // The room is gone even though the release failed
        assert!(Database::get_room(db.connection(), room.id())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_delete_room_forbidden_for_outsider() {
        let mut db = create_test_database();
        let (_, company) = seeded_company(&mut db);
        let room = create_test_room(company.id(), "War Room");
        db.create_room(&room).unwrap();
        let outsider = create_test_user("mallory@example.com");
        db.create_user(&outsider).unwrap();

        let store = MockObjectStore::new();
        let err = RoomOperations::delete_room(&mut db, &store, room.id(), "mallory@example.com")
            .unwrap_err();
        assert!(err.is_forbidden());
        assert!(Database::get_room(db.connection(), room.id())
            .unwrap()
            .is_some());
    }
}
