//! Create command implementation.
//!
//! This module implements the `create` command, which inserts one
//! registration and prints its new id.

use crate::error::CliError;
use crate::utils::{load_configuration, require_non_blank, with_database, GlobalOptions};
use chrono::NaiveDate;
use clap::Args;
use registrar::RegistrationDetails;

/// Create a record.
#[derive(Args)]
pub struct CreateCommand {
    /// Person's name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Email address (must not already be registered)
    #[arg(long, value_name = "EMAIL")]
    pub email: String,

    /// Date of birth
    #[arg(long = "dob", alias = "date-of-birth", value_name = "YYYY-MM-DD")]
    pub date_of_birth: Option<NaiveDate>,
}

impl CreateCommand {
    /// Execute the create command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        require_non_blank("--name", &self.name)?;
        require_non_blank("--email", &self.email)?;
        let config = load_configuration(global)?;

        let details = RegistrationDetails::new(self.name, self.email)
            .with_date_of_birth(self.date_of_birth);

        let id = with_database(global, &config, |db| Ok(db.create_registration(&details)?))?;

        println!("{id}");
        global.status("Record created successfully!");

        Ok(())
    }
}
