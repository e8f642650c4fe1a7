//! Cancel command implementation.
//!
//! This module implements the `cancel` command, which cancels a reservation
//! on behalf of its owner. Knowing the reservation id is not enough; the
//! requester must be the user the reservation belongs to.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use huddle::operations::BookingOperations;

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Identifier of the reservation
    #[arg(long, value_name = "ID")]
    pub id: String,

    /// Email of the requesting user (must be the reservation's owner)
    #[arg(long, value_name = "EMAIL", env = "HUDDLE_EMAIL")]
    pub email: String,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let cancelled =
            BookingOperations::cancel(&mut db, &self.id, &self.email).map_err(CliError::from)?;

        if !global.quiet {
            eprintln!(
                "Cancelled reservation {} ({} {})",
                cancelled.id(),
                cancelled.date(),
                cancelled.slot()
            );
        }

        Ok(())
    }
}
