//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use chrono::NaiveDate;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::RegistrationDetails;

/// Creates a temporary test database with the schema in place.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("registration.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();
    db.ensure_schema().unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Builds registration details, parsing `dob` as `YYYY-MM-DD`.
///
/// # Panics
///
/// Panics if `dob` is not a valid date.
#[must_use]
pub fn details(name: &str, email: &str, dob: Option<&str>) -> RegistrationDetails {
    let date = dob.map(|d| d.parse::<NaiveDate>().unwrap());
    RegistrationDetails::new(name, email).with_date_of_birth(date)
}
