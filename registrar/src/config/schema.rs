//! Configuration schema definitions.
//!
//! This module defines the structure of `registrar.yaml`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete configuration structure.
///
/// Every field is optional; unset fields fall back to command-line
/// arguments or built-in defaults.
///
/// # Examples
///
/// ```
/// use registrar::config::{Config, OutputFormat};
///
/// let config: Config = serde_yaml::from_str(
///     "database: data/registration.db\noutput_format: json\n",
/// ).unwrap();
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path of the database file.
    pub database: Option<PathBuf>,

    /// Maximum time to wait for a database lock held by another process (seconds).
    pub busy_timeout_seconds: Option<u64>,

    /// Output format for the read command.
    pub output_format: Option<OutputFormat>,
}

/// Output format for listing registrations.
///
/// # Examples
///
/// ```
/// use registrar::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}
