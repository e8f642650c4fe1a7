//! List command implementation.
//!
//! This module implements the `list` command, which displays a user's
//! reservations in various formats (table, JSON, CSV, TSV), ordered by date
//! then start time.

use crate::error::CliError;
use crate::output::{print_listing, resolve_format, Listing, OutputFormat};
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use huddle::operations::BookingOperations;
use huddle::ReservationView;

/// List a user's reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Email of the user whose reservations to list
    #[arg(long, value_name = "EMAIL", env = "HUDDLE_EMAIL")]
    pub email: String,

    /// Output format
    #[arg(long, value_enum, env = "HUDDLE_OUTPUT_FORMAT", ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Filter by room name
    #[arg(long, value_name = "NAME")]
    pub filter_room: Option<String>,

    /// Filter by date (DD/MM/YYYY)
    #[arg(long, value_name = "DATE")]
    pub filter_date: Option<String>,
}

impl Listing for ReservationView {
    const COLUMNS: &'static [&'static str] = &["id", "date", "slot", "room", "capacity"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.date.to_string(),
            self.slot.to_string(),
            self.room.name.clone(),
            self.room.capacity.to_string(),
        ]
    }

    fn json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "date": self.date.to_string(),
            "slot": self.slot.to_string(),
            "room": self.room.name,
            "capacity": self.room.capacity,
        })
    }
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Open database (read-only access is fine)
        let db = open_database(global, &config)?;

        // 3. Query the user's reservations
        let mut views =
            BookingOperations::list_reservations(&db, &self.email).map_err(CliError::from)?;

        // 4. Apply filters
        if let Some(ref room) = self.filter_room {
            views.retain(|v| v.room.name == *room);
        }

        if let Some(ref date) = self.filter_date {
            let date = huddle::ReservationDate::parse(date)
                .map_err(huddle::Error::from)
                .map_err(CliError::from)?;
            views.retain(|v| v.date == date);
        }

        // 5. Format and output to stdout
        print_listing(resolve_format(self.format, &config), &views)
    }
}
