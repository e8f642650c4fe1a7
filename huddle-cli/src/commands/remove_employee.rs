//! Remove-employee command implementation.
//!
//! This module implements the `remove-employee` command, which detaches an
//! employee from a company. The user record survives; only its membership
//! link is cleared.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use huddle::operations::{EmployeeOptions, MembershipOperations};

/// Remove an employee from a company.
#[derive(Args)]
pub struct RemoveEmployeeCommand {
    /// Identifier of the company
    #[arg(long, value_name = "ID")]
    pub company_id: String,

    /// Email of the requesting user (must be the company's creator)
    #[arg(long, value_name = "EMAIL", env = "HUDDLE_EMAIL")]
    pub email: String,

    /// Email of the employee to remove
    #[arg(long, value_name = "EMAIL")]
    pub employee_email: String,
}

impl RemoveEmployeeCommand {
    /// Execute the remove-employee command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let options = EmployeeOptions::new(&self.company_id, &self.email, &self.employee_email);
        MembershipOperations::remove_employee(&mut db, &options).map_err(CliError::from)?;

        if !global.quiet {
            eprintln!("Removed '{}' from the company", self.employee_email);
        }

        Ok(())
    }
}
