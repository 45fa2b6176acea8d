//! Read command implementation.
//!
//! This module implements the `read` command, which displays stored
//! registrations in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{format_date, load_configuration, with_database, GlobalOptions};
use clap::{Args, ValueEnum};
use registrar::{Registration, RegistrationId};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 4] = ["id", "name", "email", "date_of_birth"];

/// Read records.
#[derive(Args)]
pub struct ReadCommand {
    /// Output format (default: from the configuration file, else table)
    #[arg(
        long,
        value_enum,
        env = "REGISTRAR_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: Option<OutputFormat>,

    /// Only show the record with this id
    #[arg(long, value_name = "ID")]
    pub id: Option<RegistrationId>,
}

/// Output format for the read command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<registrar::OutputFormat> for OutputFormat {
    fn from(format: registrar::OutputFormat) -> Self {
        match format {
            registrar::OutputFormat::Table => Self::Table,
            registrar::OutputFormat::Json => Self::Json,
            registrar::OutputFormat::Csv => Self::Csv,
            registrar::OutputFormat::Tsv => Self::Tsv,
        }
    }
}

impl ReadCommand {
    /// Execute the read command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let format = self
            .format
            .unwrap_or_else(|| config.output_format.unwrap_or_default().into());

        let id = self.id;
        let registrations = with_database(global, &config, |db| match id {
            Some(id) => Ok(db.get_registration(id)?.into_iter().collect::<Vec<_>>()),
            None => Ok(db.list_registrations()?),
        })?;

        if registrations.is_empty() {
            if id.is_some() {
                global.warning("Record not found.");
            } else {
                global.status("No records found.");
            }
        }

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        render(&registrations, format, &mut handle)
    }
}

/// Write registrations to `out` in the requested format.
pub fn render<W: Write>(
    registrations: &[Registration],
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => format_as_table(registrations, out),
        OutputFormat::Json => format_as_json(registrations, out),
        OutputFormat::Csv => format_as_delimited(registrations, b',', out),
        OutputFormat::Tsv => format_as_delimited(registrations, b'\t', out),
    }
}

/// Format registrations as a human-readable table.
fn format_as_table<W: Write>(registrations: &[Registration], out: &mut W) -> Result<(), CliError> {
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for reg in registrations {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            reg.id(),
            reg.name(),
            reg.email(),
            format_date(reg.date_of_birth(), "-"),
        )?;
    }

    Ok(())
}

/// Format registrations as a JSON array.
fn format_as_json<W: Write>(registrations: &[Registration], out: &mut W) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, registrations)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(out)?;
    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format registrations as delimited output (CSV or TSV).
fn format_as_delimited<W: Write>(
    registrations: &[Registration],
    delimiter: u8,
    out: &mut W,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for reg in registrations {
        writer
            .write_record([
                reg.id().to_string(),
                reg.name().to_string(),
                reg.email().to_string(),
                format_date(reg.date_of_birth(), ""),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
