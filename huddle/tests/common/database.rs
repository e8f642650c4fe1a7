//! Shared database test utilities.

use huddle::database::{Database, DatabaseConfig};
use huddle::operations::{
    CreateRoomOptions, MembershipOperations, RegisterOperations, RegisterOptions, RoomOperations,
};
use huddle::{Company, Room, User};

/// Creates a temporary test database that will be cleaned up when dropped.
///
/// Returns the database instance. The temporary directory is tied to the
/// database's lifetime through the test.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Registers a user through the public operations API and returns the record.
#[allow(dead_code)]
pub fn register_user(db: &mut Database, email: &str) -> User {
    RegisterOperations::register(db, &RegisterOptions::new(email))
        .unwrap()
        .user
}

/// Registers an owner and stands up a company with a single eight-seat room.
///
/// Returns the owner, the company, and the room.
#[allow(dead_code)]
pub fn setup_company_with_room(
    db: &mut Database,
    owner_email: &str,
    company_name: &str,
) -> (User, Company, Room) {
    let owner = register_user(db, owner_email);
    let company = MembershipOperations::create_company(db, owner_email, company_name).unwrap();
    let room = RoomOperations::create_room(
        db,
        &CreateRoomOptions::new(company.id(), owner_email, "Conference Room", 8),
    )
    .unwrap();

    (owner, company, room)
}
