//! Update command implementation.
//!
//! This module implements the `update` command, which replaces the name,
//! email and date of birth of the record with a given id.

use crate::error::CliError;
use crate::utils::{load_configuration, require_non_blank, with_database, GlobalOptions};
use chrono::NaiveDate;
use clap::Args;
use registrar::{RegistrationDetails, RegistrationId, WriteOutcome};

/// Update a record by id.
#[derive(Args)]
pub struct UpdateCommand {
    /// Id of the record to update
    #[arg(long, value_name = "ID")]
    pub id: RegistrationId,

    /// New name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// New email address
    #[arg(long, value_name = "EMAIL")]
    pub email: String,

    /// New date of birth (omit to clear it)
    #[arg(long = "dob", alias = "date-of-birth", value_name = "YYYY-MM-DD")]
    pub date_of_birth: Option<NaiveDate>,
}

impl UpdateCommand {
    /// Execute the update command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        require_non_blank("--name", &self.name)?;
        require_non_blank("--email", &self.email)?;
        let config = load_configuration(global)?;

        let details = RegistrationDetails::new(self.name, self.email)
            .with_date_of_birth(self.date_of_birth);

        let outcome = with_database(global, &config, |db| {
            Ok(db.update_registration(self.id, &details)?)
        })?;

        match outcome {
            WriteOutcome::Applied => global.status("Record updated successfully!"),
            WriteOutcome::NotFound => global.warning("Record not found."),
        }

        Ok(())
    }
}
