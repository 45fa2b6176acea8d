//! Delete command implementation.
//!
//! This module implements the `delete` command, which removes the record
//! with a given id.

use crate::error::CliError;
use crate::utils::{load_configuration, with_database, GlobalOptions};
use clap::Args;
use registrar::{RegistrationId, WriteOutcome};

/// Delete a record by id.
#[derive(Args)]
pub struct DeleteCommand {
    /// Id of the record to delete
    #[arg(long, value_name = "ID")]
    pub id: RegistrationId,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let outcome = with_database(global, &config, |db| Ok(db.delete_registration(self.id)?))?;

        match outcome {
            WriteOutcome::Applied => global.status("Record deleted successfully!"),
            WriteOutcome::NotFound => global.warning("Record not found."),
        }

        Ok(())
    }
}
