//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands. Each record subcommand maps
//! to exactly one store operation.

use crate::commands::{
    CompletionsCommand, CreateCommand, DeleteCommand, ReadCommand, UpdateCommand,
};
use clap::{Parser, Subcommand};
use registrar::database::MAX_BUSY_TIMEOUT_SECONDS;
use std::path::PathBuf;

/// Command-line tool for managing registrations.
#[derive(Parser)]
#[command(name = "registrar")]
#[command(version, about = "Create, read, update and delete registrations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path of the database file (default: ./registration.db)
    #[arg(long, value_name = "PATH", global = true, env = "REGISTRAR_DATABASE")]
    pub database: Option<PathBuf>,

    /// Configuration file (default: ./registrar.yaml if present)
    #[arg(long, value_name = "PATH", global = true, env = "REGISTRAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        env = "REGISTRAR_BUSY_TIMEOUT",
        value_parser = clap::value_parser!(u64).range(0..=MAX_BUSY_TIMEOUT_SECONDS)
    )]
    pub busy_timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a record
    Create(CreateCommand),

    /// Read records
    Read(ReadCommand),

    /// Update a record by id
    Update(UpdateCommand),

    /// Delete a record by id
    Delete(DeleteCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
