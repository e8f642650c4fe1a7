//! List-rooms command implementation.
//!
//! This module implements the `list-rooms` command, which lists a company's
//! rooms in various formats.

use crate::error::CliError;
use crate::output::{print_listing, resolve_format, Listing, OutputFormat};
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use huddle::operations::RoomOperations;
use huddle::Room;

/// List a company's rooms.
#[derive(Args)]
pub struct ListRoomsCommand {
    /// Identifier of the company
    #[arg(long, value_name = "ID")]
    pub company_id: String,

    /// Output format
    #[arg(long, value_enum, env = "HUDDLE_OUTPUT_FORMAT", ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl Listing for Room {
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "capacity", "description", "image_url"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id().to_string(),
            self.name().to_string(),
            self.capacity().to_string(),
            self.description().unwrap_or("").to_string(),
            self.image_url().unwrap_or("").to_string(),
        ]
    }

    fn json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id(),
            "name": self.name(),
            "capacity": self.capacity(),
            "description": self.description(),
            "image_url": self.image_url(),
        })
    }
}

impl ListRoomsCommand {
    /// Execute the list-rooms command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let listing =
            RoomOperations::list_rooms(&db, &self.company_id).map_err(CliError::from)?;

        print_listing(resolve_format(self.format, &config), &listing.rooms)
    }
}
