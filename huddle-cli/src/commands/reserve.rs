//! Reserve command implementation.
//!
//! This module implements the `reserve` command, which books one or more
//! slots in a room on a date. Booking is all-or-nothing: if any requested
//! slot conflicts, nothing is booked.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use huddle::operations::{BookingOperations, ReserveOptions};

/// Book one or more slots in a room.
#[derive(Args)]
pub struct ReserveCommand {
    /// Email of the booking user
    #[arg(long, value_name = "EMAIL", env = "HUDDLE_EMAIL")]
    pub email: String,

    /// Identifier of the room
    #[arg(long, value_name = "ID")]
    pub room_id: String,

    /// Reservation date (DD/MM/YYYY)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Slot to book, as "HH:mm - HH:mm" (repeat for multiple slots)
    #[arg(long = "slot", value_name = "SLOT", required = true)]
    pub slots: Vec<String>,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let options = ReserveOptions::new(&self.email, &self.room_id, &self.date, self.slots);
        let created = BookingOperations::reserve(&mut db, &options).map_err(CliError::from)?;

        // Reservation ids to stdout, one per line (shell-friendly)
        for view in &created {
            println!("{}", view.id);
        }

        if !global.quiet {
            if let Some(first) = created.first() {
                eprintln!(
                    "Booked {} slot(s) in '{}' on {}",
                    created.len(),
                    first.room.name,
                    first.date
                );
            }
        }

        Ok(())
    }
}
