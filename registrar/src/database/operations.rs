//! Database CRUD operations for registrations.
//!
//! This module implements the create, read, update, and delete operations
//! over the `Registration` table. Every statement is parameterized, and
//! each write runs in its own IMMEDIATE transaction.

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, TransactionBehavior};

use crate::error::Result;
use crate::{Registration, RegistrationDetails, RegistrationId, WriteOutcome};

use super::connection::Database;
use super::schema::{
    COUNT_REGISTRATIONS, DELETE_REGISTRATION, INSERT_REGISTRATION, SELECT_ALL_REGISTRATIONS,
    SELECT_REGISTRATION, UPDATE_REGISTRATION,
};

/// Column index of `DateOfBirth` in every registration query.
const DATE_OF_BIRTH_COLUMN: usize = 3;

/// Helper function to deserialize a registration from a database row.
///
/// Expects row fields in this order: `ID`, `Name`, `Email`, `DateOfBirth`
fn row_to_registration(row: &rusqlite::Row<'_>) -> rusqlite::Result<Registration> {
    let id: i64 = row.get(0)?;
    let details = RegistrationDetails {
        name: row.get(1)?,
        email: row.get(2)?,
        date_of_birth: parse_date_of_birth(id, row.get(DATE_OF_BIRTH_COLUMN)?)?,
    };
    Ok(Registration::new(RegistrationId::new(id), details))
}

/// Parses a stored `DateOfBirth`, naming the offending row on failure.
fn parse_date_of_birth(id: i64, raw: Option<String>) -> rusqlite::Result<Option<NaiveDate>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                DATE_OF_BIRTH_COLUMN,
                Type::Text,
                format!("registration {id} has invalid DateOfBirth {raw:?}: {e}").into(),
            )
        })
}

impl Database {
    /// Inserts a new registration and returns its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConstraintViolation`](crate::Error::ConstraintViolation)
    /// if the email is already registered, and
    /// [`Error::Storage`](crate::Error::Storage) for any other failure.
    /// The table is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use registrar::database::{Database, DatabaseConfig};
    /// use registrar::RegistrationDetails;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/registration.db")).unwrap();
    /// db.ensure_schema().unwrap();
    ///
    /// let id = db
    ///     .create_registration(&RegistrationDetails::new("Alice", "alice@x.com"))
    ///     .unwrap();
    /// println!("created {id}");
    /// ```
    pub fn create_registration(&mut self, details: &RegistrationDetails) -> Result<RegistrationId> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            INSERT_REGISTRATION,
            params![details.name, details.email, details.date_of_birth],
        )?;
        let id = RegistrationId::new(tx.last_insert_rowid());

        tx.commit()?;
        log::info!("created registration {id}");
        Ok(id)
    }

    /// Returns every registration in storage order.
    ///
    /// An empty table yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`](crate::Error::Storage) if the query fails,
    /// or if a stored `DateOfBirth` is not a `YYYY-MM-DD` date; the message
    /// then names the id of that row.
    pub fn list_registrations(&self) -> Result<Vec<Registration>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_REGISTRATIONS)?;
        let registrations = stmt
            .query_map([], row_to_registration)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        log::debug!("read {} registration(s)", registrations.len());
        Ok(registrations)
    }

    /// Retrieves one registration by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(registration))` if the registration exists
    /// - `Ok(None)` if it doesn't
    /// - `Err(_)` if a database error occurs
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`](crate::Error::Storage) if the query fails.
    pub fn get_registration(&self, id: RegistrationId) -> Result<Option<Registration>> {
        let registration = self
            .conn
            .query_row(SELECT_REGISTRATION, params![id.value()], row_to_registration)
            .optional()?;
        Ok(registration)
    }

    /// Returns the number of stored registrations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`](crate::Error::Storage) if the query fails.
    pub fn count_registrations(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_REGISTRATIONS, [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Replaces name, email and date of birth of the registration with `id`.
    ///
    /// Returns [`WriteOutcome::NotFound`] when no row has that id; the
    /// table is left unchanged in that case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConstraintViolation`](crate::Error::ConstraintViolation)
    /// if the new email belongs to a different registration, and
    /// [`Error::Storage`](crate::Error::Storage) for any other failure.
    pub fn update_registration(
        &mut self,
        id: RegistrationId,
        details: &RegistrationDetails,
    ) -> Result<WriteOutcome> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows = tx.execute(
            UPDATE_REGISTRATION,
            params![
                details.name,
                details.email,
                details.date_of_birth,
                id.value()
            ],
        )?;

        tx.commit()?;
        let outcome = WriteOutcome::from_rows_affected(rows);
        log::info!("update of registration {id}: {outcome:?}");
        Ok(outcome)
    }

    /// Deletes the registration with `id`.
    ///
    /// Returns [`WriteOutcome::NotFound`] when no row has that id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`](crate::Error::Storage) if the statement fails.
    pub fn delete_registration(&mut self, id: RegistrationId) -> Result<WriteOutcome> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows = tx.execute(DELETE_REGISTRATION, params![id.value()])?;

        tx.commit()?;
        let outcome = WriteOutcome::from_rows_affected(rows);
        log::info!("delete of registration {id}: {outcome:?}");
        Ok(outcome)
    }
}
