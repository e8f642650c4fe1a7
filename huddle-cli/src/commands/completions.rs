//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Installed binary name. The package is `huddle-cli` but the binary is
/// `huddle`, so `env!("CARGO_PKG_NAME")` would produce the wrong name here.
const BIN_NAME: &str = "huddle";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();
        let bin_name = BIN_NAME;

        eprintln!("# Generating {} completion script", self.shell);
        eprintln!("# Run the following command to enable completions:");

        match self.shell {
            Shell::Bash => {
                eprintln!(
                    "#   huddle completions bash > ~/.local/share/bash-completion/completions/huddle"
                );
                eprintln!("# Or source it directly in ~/.bashrc:");
                eprintln!("#   eval \"$(huddle completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   huddle completions zsh > ~/.zsh/completions/_huddle");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                eprintln!("# Or add to ~/.zshrc:");
                eprintln!("#   eval \"$(huddle completions zsh)\"");
            }
            Shell::Fish => {
                eprintln!("#   huddle completions fish > ~/.config/fish/completions/huddle.fish");
                eprintln!("# Or add to config.fish:");
                eprintln!("#   huddle completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!("#   huddle completions powershell > $PROFILE");
                eprintln!("# Or run:");
                eprintln!("#   huddle completions powershell | Out-String | Invoke-Expression");
            }
            Shell::Elvish => {
                // Elvish included by default in clap_complete but no custom instructions needed
            }
            _ => {
                // Future shells added to clap_complete
            }
        }

        eprintln!();

        generate(self.shell, &mut cmd, bin_name, &mut io::stdout());

        Ok(())
    }
}
