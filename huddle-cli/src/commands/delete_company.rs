//! Delete-company command implementation.
//!
//! This module implements the `delete-company` command, which removes a
//! company and cascades over its members, rooms, reservations, and stored
//! room images. Only the company's creator may run it.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use huddle::operations::MembershipOperations;
use huddle::NoopObjectStore;

/// Delete a company and everything attached to it.
#[derive(Args)]
pub struct DeleteCompanyCommand {
    /// Identifier of the company
    #[arg(long, value_name = "ID")]
    pub company_id: String,

    /// Email of the requesting user (must be the company's creator)
    #[arg(long, value_name = "EMAIL", env = "HUDDLE_EMAIL")]
    pub email: String,
}

impl DeleteCompanyCommand {
    /// Execute the delete-company command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        // No image hosting is wired into the CLI; releases are logged no-ops
        let result = MembershipOperations::delete_company(
            &mut db,
            &NoopObjectStore,
            &self.company_id,
            &self.email,
        )
        .map_err(CliError::from)?;

        if !global.quiet {
            eprintln!(
                "Deleted company '{}': detached {} member(s), removed {} reservation(s) and {} room(s)",
                result.company.name(),
                result.detached_users,
                result.removed_reservations,
                result.removed_rooms,
            );

            for url in &result.orphaned_images {
                eprintln!("Warning: image '{url}' could not be released");
            }
        }

        Ok(())
    }
}
