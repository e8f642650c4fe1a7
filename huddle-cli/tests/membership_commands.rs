//! Integration tests for company and employee management commands.
//!
//! These tests cover:
//! - create-company, list-companies
//! - add-employee, remove-employee, list-employees
//! - delete-company and its cascade
//! - Creator-only authorization and the one-company-per-user rule

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// Company Creation
// ============================================================================

/// Test creating a company outputs its id.
#[test]
fn test_create_company() {
    let env = TestEnv::new();
    env.register("alice@example.com");

    let output = env
        .command()
        .args([
            "create-company",
            "--email",
            "alice@example.com",
            "--name",
            "Initech",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Initech"))
        .get_output()
        .clone();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.trim().is_empty(), "company id on stdout");
}

/// Company names are unique; a second take fails with the conflict code.
#[test]
fn test_create_company_duplicate_name() {
    let env = TestEnv::new();
    env.register("alice@example.com");
    env.register("bob@example.com");
    env.create_company("alice@example.com", "Initech");

    env.command()
        .args([
            "create-company",
            "--email",
            "bob@example.com",
            "--name",
            "Initech",
        ])
        .assert()
        .failure()
        .code(8)
        .stderr(predicate::str::contains("Initech"));
}

/// An unregistered owner fails with the not-found exit code.
#[test]
fn test_create_company_unknown_owner() {
    let env = TestEnv::new();
    env.command().args(["init"]).assert().success();

    env.command()
        .args([
            "create-company",
            "--email",
            "ghost@example.com",
            "--name",
            "Initech",
        ])
        .assert()
        .failure()
        .code(1);
}

/// list-companies shows the companies the user created.
#[test]
fn test_list_companies() {
    let env = TestEnv::new();
    env.register("alice@example.com");
    env.create_company("alice@example.com", "Initech");
    env.create_company("alice@example.com", "Globex");

    let output = env
        .command()
        .args([
            "list-companies",
            "--email",
            "alice@example.com",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    // Ordered by name
    assert_eq!(entries[0]["name"], "Globex");
    assert_eq!(entries[1]["name"], "Initech");
}

// ============================================================================
// Employee Management
// ============================================================================

/// Adding an email with no prior record creates the user already attached.
#[test]
fn test_add_employee_creates_user() {
    let env = TestEnv::new();
    env.register("alice@example.com");
    let company_id = env.create_company("alice@example.com", "Initech");

    let output = env
        .command()
        .args([
            "add-employee",
            "--company-id",
            company_id.as_str(),
            "--email",
            "alice@example.com",
            "--employee-email",
            "newhire@example.com",
        ])
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.trim().is_empty(), "employee id on stdout");

    // The created user shows up on the roster
    let roster = env
        .command()
        .args([
            "list-employees",
            "--company-id",
            company_id.as_str(),
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = String::from_utf8(roster.stdout).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["email"], "newhire@example.com");
}

/// Re-adding a current member fails with the validation exit code.
#[test]
fn test_add_employee_already_member() {
    let env = TestEnv::new();
    env.register("alice@example.com");
    env.register("bob@example.com");
    let company_id = env.create_company("alice@example.com", "Initech");

    let add = |env: &TestEnv| {
        env.command()
            .args([
                "add-employee",
                "--company-id",
                company_id.as_str(),
                "--email",
                "alice@example.com",
                "--employee-email",
                "bob@example.com",
            ])
            .assert()
    };

    add(&env).success();
    add(&env).failure().code(4).stderr(predicate::str::contains("already a member"));
}

/// A user employed elsewhere cannot be added: conflict, not transfer.
#[test]
fn test_add_employee_cross_company_conflict() {
    let env = TestEnv::new();
    env.register("alice@example.com");
    env.register("carol@example.com");
    env.register("bob@example.com");
    let company_a = env.create_company("alice@example.com", "Initech");
    let company_b = env.create_company("carol@example.com", "Globex");

    env.command()
        .args([
            "add-employee",
            "--company-id",
            company_a.as_str(),
            "--email",
            "alice@example.com",
            "--employee-email",
            "bob@example.com",
        ])
        .assert()
        .success();

    // Bob already works at Initech
    env.command()
        .args([
            "add-employee",
            "--company-id",
            company_b.as_str(),
            "--email",
            "carol@example.com",
            "--employee-email",
            "bob@example.com",
        ])
        .assert()
        .failure()
        .code(8)
        .stderr(predicate::str::contains("another company"));
}

/// Only the creator may manage the roster.
#[test]
fn test_add_employee_requires_creator() {
    let env = TestEnv::new();
    env.register("alice@example.com");
    env.register("bob@example.com");
    env.register("carol@example.com");
    let company_id = env.create_company("alice@example.com", "Initech");

    env.command()
        .args([
            "add-employee",
            "--company-id",
            company_id.as_str(),
            "--email",
            "alice@example.com",
            "--employee-email",
            "bob@example.com",
        ])
        .assert()
        .success();

    // Bob is a member, but membership is not administration
    env.command()
        .args([
            "add-employee",
            "--company-id",
            company_id.as_str(),
            "--email",
            "bob@example.com",
            "--employee-email",
            "carol@example.com",
        ])
        .assert()
        .failure()
        .code(9);
}

/// Removing an employee clears the membership link but keeps the user.
#[test]
fn test_remove_employee() {
    let env = TestEnv::new();
    let (company_id, room_id) = env.seed_room("alice@example.com");
    env.register("bob@example.com");

    env.command()
        .args([
            "add-employee",
            "--company-id",
            company_id.as_str(),
            "--email",
            "alice@example.com",
            "--employee-email",
            "bob@example.com",
        ])
        .assert()
        .success();

    env.reserve("bob@example.com", &room_id, "06/05/2025", &["09:00 - 10:00"]);

    env.command()
        .args([
            "remove-employee",
            "--company-id",
            company_id.as_str(),
            "--email",
            "alice@example.com",
            "--employee-email",
            "bob@example.com",
        ])
        .assert()
        .success();

    // The roster is empty again
    let roster = env
        .command()
        .args([
            "list-employees",
            "--company-id",
            company_id.as_str(),
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .clone();
    let parsed: serde_json::Value =
        serde_json::from_str(String::from_utf8(roster.stdout).unwrap().as_str()).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(0));

    // Bob's user record and his bookings survive the detachment
    let listed = env.list_json("bob@example.com");
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

/// Removing someone who is not on the roster fails with the validation code.
#[test]
fn test_remove_employee_not_a_member() {
    let env = TestEnv::new();
    env.register("alice@example.com");
    env.register("bob@example.com");
    let company_id = env.create_company("alice@example.com", "Initech");

    env.command()
        .args([
            "remove-employee",
            "--company-id",
            company_id.as_str(),
            "--email",
            "alice@example.com",
            "--employee-email",
            "bob@example.com",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("not a member"));
}

/// list-employees for an unknown company fails with the not-found code.
#[test]
fn test_list_employees_unknown_company() {
    let env = TestEnv::new();
    env.command().args(["init"]).assert().success();

    env.command()
        .args(["list-employees", "--company-id", "no-such-company"])
        .assert()
        .failure()
        .code(1);
}

// ============================================================================
// Company Deletion Cascade
// ============================================================================

/// Deleting a company removes its rooms and their reservations, and
/// detaches its members, in one pass.
#[test]
fn test_delete_company_cascade() {
    let env = TestEnv::new();
    let (company_a, room_1) = env.seed_room("alice@example.com");
    let room_2 = env.create_room(&company_a, "alice@example.com", "Annex", 4);

    env.register("bob@example.com");
    env.command()
        .args([
            "add-employee",
            "--company-id",
            company_a.as_str(),
            "--email",
            "alice@example.com",
            "--employee-email",
            "bob@example.com",
        ])
        .assert()
        .success();

    // A second company to prove the cascade stays inside the first
    env.register("carol@example.com");
    let company_b = env.create_company("carol@example.com", "Globex");
    let room_3 = env.create_room(&company_b, "carol@example.com", "Loft", 6);

    env.reserve("alice@example.com", &room_1, "06/05/2025", &["09:00 - 10:00"]);
    env.reserve("bob@example.com", &room_2, "06/05/2025", &["09:00 - 10:00", "10:00 - 11:00"]);
    env.reserve("bob@example.com", &room_3, "06/05/2025", &["09:00 - 10:00"]);

    env.command()
        .args([
            "delete-company",
            "--company-id",
            company_a.as_str(),
            "--email",
            "alice@example.com",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("detached 1 member(s)"))
        .stderr(predicate::str::contains("3 reservation(s)"))
        .stderr(predicate::str::contains("2 room(s)"));

    // The company and its rooms are gone
    env.command()
        .args(["list-rooms", "--company-id", company_a.as_str()])
        .assert()
        .failure()
        .code(1);

    // Reservations on the deleted rooms are gone; others survive
    let listed = env.list_json("alice@example.com");
    assert_eq!(listed.as_array().map(Vec::len), Some(0));
    let listed = env.list_json("bob@example.com");
    let entries = listed.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["room"], "Loft");

    // Bob's membership was cleared, so Globex can hire him now
    env.command()
        .args([
            "add-employee",
            "--company-id",
            company_b.as_str(),
            "--email",
            "carol@example.com",
            "--employee-email",
            "bob@example.com",
        ])
        .assert()
        .success();
}

/// Only the creator may delete the company.
#[test]
fn test_delete_company_requires_creator() {
    let env = TestEnv::new();
    env.register("alice@example.com");
    env.register("bob@example.com");
    let company_id = env.create_company("alice@example.com", "Initech");

    env.command()
        .args([
            "delete-company",
            "--company-id",
            company_id.as_str(),
            "--email",
            "bob@example.com",
        ])
        .assert()
        .failure()
        .code(9);

    // Still there
    env.command()
        .args([
            "list-companies",
            "--email",
            "alice@example.com",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initech"));
}

/// Deleting an unknown company fails with the not-found exit code.
#[test]
fn test_delete_company_unknown() {
    let env = TestEnv::new();
    env.register("alice@example.com");

    env.command()
        .args([
            "delete-company",
            "--company-id",
            "no-such-company",
            "--email",
            "alice@example.com",
        ])
        .assert()
        .failure()
        .code(1);
}
