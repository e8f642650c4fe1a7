//! Main entry point for the huddle CLI.
//!
//! This is the command-line interface for the huddle room reservation system.
//! It covers the whole reservation lifecycle:
//! - `register`: Register a user by email
//! - `create-company` / `add-employee` / `delete-company`: Manage companies
//! - `create-room` / `attach-room-image` / `delete-room`: Manage rooms
//! - `reserve` / `list` / `cancel`: Book, list, and cancel slots
//! - `sweep`: Remove expired reservations

mod cli;
mod commands;
mod error;
mod output;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = huddle::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Register(cmd) => cmd.execute(&global),
        cli::Command::CreateCompany(cmd) => cmd.execute(&global),
        cli::Command::ListCompanies(cmd) => cmd.execute(&global),
        cli::Command::AddEmployee(cmd) => cmd.execute(&global),
        cli::Command::RemoveEmployee(cmd) => cmd.execute(&global),
        cli::Command::ListEmployees(cmd) => cmd.execute(&global),
        cli::Command::DeleteCompany(cmd) => cmd.execute(&global),
        cli::Command::CreateRoom(cmd) => cmd.execute(&global),
        cli::Command::AttachRoomImage(cmd) => cmd.execute(&global),
        cli::Command::ListRooms(cmd) => cmd.execute(&global),
        cli::Command::DeleteRoom(cmd) => cmd.execute(&global),
        cli::Command::Reserve(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::Sweep(cmd) => cmd.execute(&global),
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::ShowDataDir(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
