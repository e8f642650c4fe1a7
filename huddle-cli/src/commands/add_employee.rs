//! Add-employee command implementation.
//!
//! This module implements the `add-employee` command, which attaches a user
//! to a company, creating the user record if the email is new. Only the
//! company's creator may run it.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use huddle::operations::{EmployeeOptions, MembershipOperations};

/// Add an employee to a company.
#[derive(Args)]
pub struct AddEmployeeCommand {
    /// Identifier of the company
    #[arg(long, value_name = "ID")]
    pub company_id: String,

    /// Email of the requesting user (must be the company's creator)
    #[arg(long, value_name = "EMAIL", env = "HUDDLE_EMAIL")]
    pub email: String,

    /// Email of the employee to add
    #[arg(long, value_name = "EMAIL")]
    pub employee_email: String,
}

impl AddEmployeeCommand {
    /// Execute the add-employee command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let options = EmployeeOptions::new(&self.company_id, &self.email, &self.employee_email);
        let employee =
            MembershipOperations::add_employee(&mut db, &options).map_err(CliError::from)?;

        // Employee id to stdout (shell-friendly)
        println!("{}", employee.id());

        if !global.quiet {
            eprintln!("Added '{}' to the company", employee.email());
        }

        Ok(())
    }
}
