//! List-companies command implementation.
//!
//! This module implements the `list-companies` command, which lists the
//! companies created by a user in various formats.

use crate::error::CliError;
use crate::output::{print_listing, resolve_format, Listing, OutputFormat};
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use huddle::operations::MembershipOperations;
use huddle::Company;

/// List the companies a user created.
#[derive(Args)]
pub struct ListCompaniesCommand {
    /// Email of the owning user
    #[arg(long, value_name = "EMAIL", env = "HUDDLE_EMAIL")]
    pub email: String,

    /// Output format
    #[arg(long, value_enum, env = "HUDDLE_OUTPUT_FORMAT", ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl Listing for Company {
    const COLUMNS: &'static [&'static str] = &["id", "name"];

    fn row(&self) -> Vec<String> {
        vec![self.id().to_string(), self.name().to_string()]
    }

    fn json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id(),
            "name": self.name(),
        })
    }
}

impl ListCompaniesCommand {
    /// Execute the list-companies command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let companies =
            MembershipOperations::list_companies(&db, &self.email).map_err(CliError::from)?;

        print_listing(resolve_format(self.format, &config), &companies)
    }
}
