//! Delete-room command implementation.
//!
//! This module implements the `delete-room` command, which removes a room
//! along with its reservations and releases its stored image afterwards.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use huddle::operations::RoomOperations;
use huddle::NoopObjectStore;

/// Delete a room and its reservations.
#[derive(Args)]
pub struct DeleteRoomCommand {
    /// Identifier of the room
    #[arg(long, value_name = "ID")]
    pub room_id: String,

    /// Email of the requesting user (creator or member of the owning company)
    #[arg(long, value_name = "EMAIL", env = "HUDDLE_EMAIL")]
    pub email: String,
}

impl DeleteRoomCommand {
    /// Execute the delete-room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let result =
            RoomOperations::delete_room(&mut db, &NoopObjectStore, &self.room_id, &self.email)
                .map_err(CliError::from)?;

        if !global.quiet {
            eprintln!(
                "Deleted room '{}' and {} reservation(s)",
                result.room.name(),
                result.removed_reservations
            );

            if let Some(ref url) = result.orphaned_image {
                eprintln!("Warning: image '{url}' could not be released");
            }
        }

        Ok(())
    }
}
