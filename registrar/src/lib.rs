#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # registrar
//!
//! A library for storing person registrations (name, email, date of birth)
//! in a local `SQLite` database.
//!
//! Each user action opens a [`Database`], ensures the `Registration` table
//! exists, runs exactly one operation, and closes the connection again.
//!
//! ## Core Types
//!
//! - [`Database`] and [`DatabaseConfig`]: Connection lifecycle and CRUD operations
//! - [`Registration`], [`RegistrationDetails`] and [`RegistrationId`]: Stored records
//! - [`WriteOutcome`]: Whether an update or delete found its row
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use registrar::{Database, DatabaseConfig, RegistrationDetails, WriteOutcome};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut db = Database::open(DatabaseConfig::new(dir.path().join("registration.db"))).unwrap();
//! db.ensure_schema().unwrap();
//!
//! let id = db
//!     .create_registration(&RegistrationDetails::new("Alice", "alice@x.com"))
//!     .unwrap();
//! assert_eq!(db.list_registrations().unwrap().len(), 1);
//!
//! assert_eq!(db.delete_registration(id).unwrap(), WriteOutcome::Applied);
//! assert_eq!(db.delete_registration(id).unwrap(), WriteOutcome::NotFound);
//! db.close().unwrap();
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod registration;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigLoader, OutputFormat};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use registration::{Registration, RegistrationDetails, RegistrationId, WriteOutcome};
