//! Attach-room-image command implementation.
//!
//! This module implements the `attach-room-image` command, which records the
//! URL of an already-uploaded image on a room.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use huddle::operations::RoomOperations;

/// Attach an uploaded image to a room.
#[derive(Args)]
pub struct AttachRoomImageCommand {
    /// Identifier of the room
    #[arg(long, value_name = "ID")]
    pub room_id: String,

    /// Email of the requesting user (creator or member of the owning company)
    #[arg(long, value_name = "EMAIL", env = "HUDDLE_EMAIL")]
    pub email: String,

    /// URL of the hosted image
    #[arg(long, value_name = "URL")]
    pub url: String,
}

impl AttachRoomImageCommand {
    /// Execute the attach-room-image command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let room =
            RoomOperations::attach_room_image(&mut db, &self.room_id, &self.email, &self.url)
                .map_err(CliError::from)?;

        if !global.quiet {
            eprintln!("Attached image to room '{}'", room.name());
        }

        Ok(())
    }
}
