//! Common test utilities for integration tests.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;

use registrar::{Database, DatabaseConfig, RegistrationDetails};

/// A temporary directory holding one database file.
#[allow(dead_code)]
pub struct TestStore {
    /// Kept alive so the directory outlives the test.
    pub dir: TempDir,
    /// Path of the database file inside `dir`.
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    /// Creates an empty directory; the database file does not exist yet.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registration.db");
        Self { dir, path }
    }

    /// Opens the database and ensures the schema, like every user action does.
    pub fn open(&self) -> Database {
        open_at(&self.path)
    }
}

/// Opens `path` with the default configuration and ensures the schema.
pub fn open_at(path: &Path) -> Database {
    let db = Database::open(DatabaseConfig::new(path)).unwrap();
    db.ensure_schema().unwrap();
    db
}

/// Builds registration details, parsing `dob` as `YYYY-MM-DD`.
#[allow(dead_code)]
pub fn details(name: &str, email: &str, dob: Option<&str>) -> RegistrationDetails {
    let date = dob.map(|d| d.parse::<NaiveDate>().unwrap());
    RegistrationDetails::new(name, email).with_date_of_birth(date)
}
