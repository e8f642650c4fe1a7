//! Build script for huddle-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("huddle")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage meeting room reservations")
        .long_about(
            "Command-line tool for managing companies, meeting rooms, and room reservations",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("HUDDLE_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("HUDDLE_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("HUDDLE_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("register")
                .about("Register a user account")
                .long_about("Register a new user account, or look up an existing one by email"),
            Command::new("create-company")
                .about("Create a company")
                .long_about("Create a company owned by the requesting user"),
            Command::new("list-companies")
                .about("List companies visible to a user")
                .long_about("Display the companies the user created or belongs to"),
            Command::new("add-employee")
                .about("Add an employee to a company")
                .long_about("Add a registered user to a company's employee roster"),
            Command::new("remove-employee")
                .about("Remove an employee from a company")
                .long_about(
                    "Remove a user from a company's roster along with their reservations there",
                ),
            Command::new("list-employees")
                .about("List a company's employees")
                .long_about("Display all users on a company's employee roster"),
            Command::new("delete-company")
                .about("Delete a company")
                .long_about(
                    "Delete a company and cascade to its rooms, reservations, and memberships",
                ),
            Command::new("create-room")
                .about("Create a meeting room")
                .long_about("Create a meeting room inside a company"),
            Command::new("attach-room-image")
                .about("Attach an image to a room")
                .long_about("Associate a hosted image URL with a meeting room"),
            Command::new("list-rooms")
                .about("List a company's rooms")
                .long_about("Display all meeting rooms that belong to a company"),
            Command::new("delete-room")
                .about("Delete a meeting room")
                .long_about("Delete a room and cascade to its reservations"),
            Command::new("reserve")
                .about("Reserve one or more time slots")
                .long_about("Reserve one or more slots in a room for a given date, atomically"),
            Command::new("list")
                .about("List a user's reservations")
                .long_about("Display the user's reservations in chronological order"),
            Command::new("cancel")
                .about("Cancel a reservation")
                .long_about("Cancel a reservation owned by the requesting user"),
            Command::new("sweep")
                .about("Remove expired reservations")
                .long_about("Remove reservations that ended before the given (or current) moment"),
            Command::new("init")
                .about("Initialize huddle data directory and database")
                .long_about("Set up the huddle database and configuration"),
            Command::new("show-data-dir")
                .about("Show the resolved data directory path")
                .long_about("Display the path to the huddle data directory"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main huddle.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("huddle.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
