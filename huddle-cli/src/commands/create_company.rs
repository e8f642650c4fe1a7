//! Create-company command implementation.
//!
//! This module implements the `create-company` command, which creates a
//! company owned by the requesting user.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use huddle::operations::MembershipOperations;

/// Create a company owned by a user.
#[derive(Args)]
pub struct CreateCompanyCommand {
    /// Email of the owning user
    #[arg(long, value_name = "EMAIL", env = "HUDDLE_EMAIL")]
    pub email: String,

    /// Company name (must be unique)
    #[arg(long, value_name = "NAME")]
    pub name: String,
}

impl CreateCompanyCommand {
    /// Execute the create-company command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let company = MembershipOperations::create_company(&mut db, &self.email, &self.name)
            .map_err(CliError::from)?;

        // Company id to stdout (shell-friendly)
        println!("{}", company.id());

        if !global.quiet {
            eprintln!("Created company '{}'", company.name());
        }

        Ok(())
    }
}
