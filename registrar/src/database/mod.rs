//! Database layer for persistent storage of registrations.
//!
//! This module provides a SQLite-based storage layer: connection
//! management, the `Registration` table schema, and CRUD operations.
//!
//! # Examples
//!
//! ```no_run
//! use registrar::database::{Database, DatabaseConfig};
//! use registrar::RegistrationDetails;
//!
//! // Open a database and make sure the table exists
//! let mut db = Database::open(DatabaseConfig::new("/tmp/registration.db")).unwrap();
//! db.ensure_schema().unwrap();
//!
//! // Create a registration
//! let details = RegistrationDetails::new("Alice", "alice@x.com");
//! db.create_registration(&details).unwrap();
//!
//! // List all registrations
//! for registration in db.list_registrations().unwrap() {
//!     println!("{registration}");
//! }
//!
//! db.close().unwrap();
//! ```

mod config;
mod connection;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

#[cfg(test)]
mod proptests;

// Re-export public API
pub use config::{
    default_database_path, DatabaseConfig, DEFAULT_BUSY_TIMEOUT, DEFAULT_DATABASE_FILE,
    MAX_BUSY_TIMEOUT_SECONDS,
};
pub use connection::Database;
pub use schema::TABLE_NAME;
