//! Main entry point for the registrar CLI.
//!
//! This is the command-line front end of the registration store.
//! It provides one command per operation:
//! - `create`: Create a record
//! - `read`: Read records
//! - `update`: Update a record by id
//! - `delete`: Delete a record by id

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route the store's log records to stderr at the requested verbosity.
    let logger = registrar::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        logger.warn(&format!("log output disabled: {e}"));
    }

    let global = GlobalOptions {
        quiet: cli.quiet,
        database: cli.database,
        config: cli.config,
        busy_timeout: cli.busy_timeout,
    };

    let result = match cli.command {
        cli::Command::Create(cmd) => cmd.execute(&global),
        cli::Command::Read(cmd) => cmd.execute(&global),
        cli::Command::Update(cmd) => cmd.execute(&global),
        cli::Command::Delete(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
