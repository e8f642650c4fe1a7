//! List-employees command implementation.
//!
//! This module implements the `list-employees` command, which lists a
//! company's member users in various formats.

use crate::error::CliError;
use crate::output::{print_listing, resolve_format, Listing, OutputFormat};
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use huddle::operations::MembershipOperations;
use huddle::User;

/// List a company's employees.
#[derive(Args)]
pub struct ListEmployeesCommand {
    /// Identifier of the company
    #[arg(long, value_name = "ID")]
    pub company_id: String,

    /// Output format
    #[arg(long, value_enum, env = "HUDDLE_OUTPUT_FORMAT", ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl Listing for User {
    const COLUMNS: &'static [&'static str] = &["id", "email", "given_name", "family_name"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id().to_string(),
            self.email().to_string(),
            self.given_name().unwrap_or("").to_string(),
            self.family_name().unwrap_or("").to_string(),
        ]
    }

    fn json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id(),
            "email": self.email(),
            "given_name": self.given_name(),
            "family_name": self.family_name(),
        })
    }
}

impl ListEmployeesCommand {
    /// Execute the list-employees command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let employees =
            MembershipOperations::list_employees(&db, &self.company_id).map_err(CliError::from)?;

        print_listing(resolve_format(self.format, &config), &employees)
    }
}
