//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading, the per-command database lifecycle, and
//! formatting helpers.

use crate::error::CliError;
use chrono::NaiveDate;
use registrar::{Config, ConfigLoader, Database};
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the database file location.
    pub database: Option<PathBuf>,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u64>,
}

impl GlobalOptions {
    /// Print a status message to stderr unless `--quiet` was given.
    pub fn status(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    /// Print a warning to stderr unless `--quiet` was given.
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("Warning: {message}");
        }
    }
}

/// Load the configuration file, if any.
///
/// Uses `--config` when given, otherwise `registrar.yaml` in the current
/// directory when present.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let cwd = env::current_dir()?;
    let config = ConfigLoader::load(global.config.as_deref(), &cwd)?;
    Ok(config)
}

/// Open the database and make sure the `Registration` table exists.
///
/// Flag values override the configuration file.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_config = config.database_config(global.database.clone(), global.busy_timeout);
    let db = Database::open(db_config)?;
    db.ensure_schema()?;
    Ok(db)
}

/// Run one action against a freshly opened database, then close it.
///
/// The connection is closed whether or not the action succeeds; an error
/// from the action takes priority over an error from closing.
pub fn with_database<T>(
    global: &GlobalOptions,
    config: &Config,
    action: impl FnOnce(&mut Database) -> Result<T, CliError>,
) -> Result<T, CliError> {
    let mut db = open_database(global, config)?;
    let result = action(&mut db);
    let closed = db.close();
    let value = result?;
    closed?;
    Ok(value)
}

/// Reject a required text argument that is empty or only whitespace.
pub fn require_non_blank(flag: &str, value: &str) -> Result<(), CliError> {
    if value.trim().is_empty() {
        return Err(CliError::InvalidArguments(format!(
            "{flag} must not be empty"
        )));
    }
    Ok(())
}

/// Format an optional date of birth for display.
pub fn format_date(date: Option<NaiveDate>, missing: &str) -> String {
    date.map_or_else(|| missing.to_string(), |d| d.format("%Y-%m-%d").to_string())
}
