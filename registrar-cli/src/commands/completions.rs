//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "registrar";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        global.status(&format!("# Generating {} completion script", self.shell));
        match self.shell {
            Shell::Bash => global.status(
                "#   registrar completions bash > ~/.local/share/bash-completion/completions/registrar",
            ),
            Shell::Zsh => global.status("#   registrar completions zsh > ~/.zsh/completions/_registrar"),
            Shell::Fish => global.status(
                "#   registrar completions fish > ~/.config/fish/completions/registrar.fish",
            ),
            Shell::PowerShell => global.status("#   registrar completions powershell > $PROFILE"),
            _ => {}
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
