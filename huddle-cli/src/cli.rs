//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddEmployeeCommand, AttachRoomImageCommand, CancelCommand, CompletionsCommand,
    CreateCompanyCommand, CreateRoomCommand, DeleteCompanyCommand, DeleteRoomCommand, InitCommand,
    ListCommand, ListCompaniesCommand, ListEmployeesCommand, ListRoomsCommand, RegisterCommand,
    RemoveEmployeeCommand, ReserveCommand, ShowDataDirCommand, SweepCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing meeting room reservations.
#[derive(Parser)]
#[command(name = "huddle")]
#[command(version, about = "Manage meeting room reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "HUDDLE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "HUDDLE_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "HUDDLE_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Register a user by email
    Register(RegisterCommand),

    /// Create a company owned by a user
    CreateCompany(CreateCompanyCommand),

    /// List the companies a user created
    ListCompanies(ListCompaniesCommand),

    /// Add an employee to a company
    AddEmployee(AddEmployeeCommand),

    /// Remove an employee from a company
    RemoveEmployee(RemoveEmployeeCommand),

    /// List a company's employees
    ListEmployees(ListEmployeesCommand),

    /// Delete a company and everything attached to it
    DeleteCompany(DeleteCompanyCommand),

    /// Create a meeting room in a company
    CreateRoom(CreateRoomCommand),

    /// Attach an uploaded image to a room
    AttachRoomImage(AttachRoomImageCommand),

    /// List a company's rooms
    ListRooms(ListRoomsCommand),

    /// Delete a room and its reservations
    DeleteRoom(DeleteRoomCommand),

    /// Book one or more slots in a room
    Reserve(ReserveCommand),

    /// List a user's reservations
    List(ListCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// Remove expired reservations
    Sweep(SweepCommand),

    /// Initialize huddle data directory and database
    Init(InitCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
