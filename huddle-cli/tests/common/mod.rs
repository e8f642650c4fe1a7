//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Seeding helpers for users, companies, rooms, and reservations

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated data directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory for test files
/// - A separate data directory for the huddle database
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the huddle data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// This creates:
    /// - A temporary directory for test files
    /// - A data directory path (not created yet - huddle will create it)
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("huddle-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// This returns a Command with only the huddle binary, allowing tests
    /// to have full control over all flags including --data-dir.
    /// Use this when you need to override the data directory or test
    /// global flag behavior.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("huddle").expect("Failed to find huddle binary")
    }

    /// Get a command builder with the data directory pre-configured.
    ///
    /// This is a convenience method that returns a Command with:
    /// - The huddle binary
    /// - The --data-dir flag set to this environment's data directory
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Run a subcommand and return its trimmed stdout.
    ///
    /// # Panics
    /// Panics if the command exits with a non-zero status.
    fn run(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run huddle command");

        assert!(
            output.status.success(),
            "Command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }

    /// Register a user and return their id.
    pub fn register(&self, email: &str) -> String {
        self.run(&["register", "--email", email])
    }

    /// Create a company owned by `email` and return its id.
    ///
    /// The owner must already be registered.
    pub fn create_company(&self, email: &str, name: &str) -> String {
        self.run(&["create-company", "--email", email, "--name", name])
    }

    /// Create a room inside a company and return its id.
    pub fn create_room(&self, company_id: &str, email: &str, name: &str, capacity: u32) -> String {
        self.run(&[
            "create-room",
            "--company-id",
            company_id,
            "--email",
            email,
            "--name",
            name,
            "--capacity",
            &capacity.to_string(),
        ])
    }

    /// Register `email`, create a company and a room for them.
    ///
    /// Returns (company_id, room_id). Collapses the seeding boilerplate
    /// most reservation tests need.
    pub fn seed_room(&self, email: &str) -> (String, String) {
        self.register(email);
        let company_id = self.create_company(email, "Acme");
        let room_id = self.create_room(&company_id, email, "Boardroom", 10);
        (company_id, room_id)
    }

    /// Reserve slots and return the created reservation ids (one per line
    /// of stdout).
    pub fn reserve(&self, email: &str, room_id: &str, date: &str, slots: &[&str]) -> Vec<String> {
        let mut args = vec!["reserve", "--email", email, "--room-id", room_id, "--date", date];
        for slot in slots {
            args.push("--slot");
            args.push(slot);
        }

        self.run(&args)
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Cancel a reservation by id.
    pub fn cancel(&self, email: &str, reservation_id: &str) {
        self.run(&["cancel", "--email", email, "--id", reservation_id]);
    }

    /// List a user's reservations as parsed JSON.
    pub fn list_json(&self, email: &str) -> serde_json::Value {
        let stdout = self.run(&["list", "--email", email, "--format", "json"]);
        serde_json::from_str(&stdout).expect("list output is not valid JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
