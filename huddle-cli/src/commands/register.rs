//! Register command implementation.
//!
//! This module implements the `register` command, which registers a user by
//! email. Registration is idempotent: an already-known email succeeds and
//! returns the existing record.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use huddle::operations::{RegisterOperations, RegisterOptions};

/// Register a user by email.
#[derive(Args)]
pub struct RegisterCommand {
    /// Email address to register
    #[arg(long, value_name = "EMAIL", env = "HUDDLE_EMAIL")]
    pub email: String,

    /// Given name
    #[arg(long, value_name = "NAME")]
    pub given_name: Option<String>,

    /// Family name
    #[arg(long, value_name = "NAME")]
    pub family_name: Option<String>,
}

impl RegisterCommand {
    /// Execute the register command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let options = RegisterOptions::new(self.email)
            .with_given_name(self.given_name)
            .with_family_name(self.family_name);

        let result = RegisterOperations::register(&mut db, &options).map_err(CliError::from)?;

        // User id to stdout (shell-friendly)
        println!("{}", result.user.id());

        if !global.quiet {
            if result.created {
                eprintln!("Registered '{}'", result.user.email());
            } else {
                eprintln!("'{}' is already registered", result.user.email());
            }
        }

        Ok(())
    }
}
