//! Create-room command implementation.
//!
//! This module implements the `create-room` command, which creates a meeting
//! room in a company. The room starts without an image; `attach-room-image`
//! completes the second phase once the bytes are hosted.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use huddle::operations::{CreateRoomOptions, RoomOperations};

/// Create a meeting room in a company.
#[derive(Args)]
pub struct CreateRoomCommand {
    /// Identifier of the owning company
    #[arg(long, value_name = "ID")]
    pub company_id: String,

    /// Email of the requesting user (creator or member of the company)
    #[arg(long, value_name = "EMAIL", env = "HUDDLE_EMAIL")]
    pub email: String,

    /// Room name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Seating capacity (must be at least 1)
    #[arg(long, value_name = "SEATS")]
    pub capacity: u32,

    /// Free-text description
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,
}

impl CreateRoomCommand {
    /// Execute the create-room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let options =
            CreateRoomOptions::new(&self.company_id, &self.email, &self.name, self.capacity)
                .with_description(self.description);

        let room = RoomOperations::create_room(&mut db, &options).map_err(CliError::from)?;

        // Room id to stdout (shell-friendly)
        println!("{}", room.id());

        if !global.quiet {
            eprintln!("Created room '{}' ({} seats)", room.name(), room.capacity());
        }

        Ok(())
    }
}
