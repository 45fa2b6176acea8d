//! Error types for the registrar library.
//!
//! This module provides the error hierarchy for all store operations,
//! using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use rusqlite::ErrorCode;
use thiserror::Error;

/// Result type alias for operations that may fail with a registrar error.
///
/// # Examples
///
/// ```
/// use registrar::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the registrar library.
///
/// "Record not found" is deliberately absent: update and delete report it
/// through [`WriteOutcome::NotFound`](crate::WriteOutcome::NotFound).
#[derive(Debug, Error)]
pub enum Error {
    /// The database file could not be opened or created.
    #[error("cannot open database {}: {source}", path.display())]
    Connection {
        /// Path of the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Creating the `Registration` table failed.
    #[error("schema error: {0}")]
    Schema(#[source] rusqlite::Error),

    /// A uniqueness rule was broken (a duplicate email).
    #[error("constraint violation: {details}")]
    ConstraintViolation {
        /// The message reported by the storage engine.
        details: String,
    },

    /// Any other failure while executing a statement.
    #[error("storage error: {0}")]
    Storage(#[source] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error in {}: {source}", path.display())]
    Configuration {
        /// The configuration file.
        path: PathBuf,
        /// The YAML parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref failure, ref message)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                Self::ConstraintViolation {
                    details: message
                        .clone()
                        .unwrap_or_else(|| failure.to_string()),
                }
            }
            other => Self::Storage(other),
        }
    }
}

impl Error {
    /// Check if error is a uniqueness conflict.
    ///
    /// # Examples
    ///
    /// ```
    /// use registrar::Error;
    ///
    /// let err = Error::ConstraintViolation {
    ///     details: "UNIQUE constraint failed: Registration.Email".to_string(),
    /// };
    /// assert!(err.is_constraint_violation());
    /// ```
    #[must_use]
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }

    /// Check if error came from opening the database.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}
