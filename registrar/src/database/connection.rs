//! Database connection management.
//!
//! This module provides the connection handle used for one user action:
//! open, ensure the schema, run one operation, close.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::error::{Error, Result};

use super::config::{DatabaseConfig, MAX_BUSY_TIMEOUT_SECONDS};
use super::schema::CREATE_REGISTRATION_TABLE;

/// A database connection wrapper with configuration.
///
/// The underlying connection is released when the handle is dropped, so
/// an early return on error still closes it. [`Database::close`] closes
/// explicitly and reports any failure to do so.
///
/// # Examples
///
/// ```no_run
/// use registrar::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/registration.db");
/// let db = Database::open(config).unwrap();
/// db.ensure_schema().unwrap();
/// db.close().unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open the database with appropriate flags, creating the file if needed
    /// - Configure the busy timeout
    ///
    /// It does not touch the schema; call [`Database::ensure_schema`] next.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] if the parent directory cannot be
    /// created, the file cannot be opened, or the busy timeout is longer
    /// than [`MAX_BUSY_TIMEOUT_SECONDS`] or cannot be applied.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        let connection_error = |source: Box<dyn std::error::Error + Send + Sync>| {
            Error::Connection {
                path: config.path.clone(),
                source,
            }
        };

        if i32::try_from(config.busy_timeout.as_millis()).is_err() {
            return Err(connection_error(
                format!(
                    "busy timeout of {}s exceeds the {MAX_BUSY_TIMEOUT_SECONDS}s maximum",
                    config.busy_timeout.as_secs()
                )
                .into(),
            ));
        }

        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| connection_error(e.into()))?;
                }
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)
            .map_err(|e| connection_error(e.into()))?;
        conn.busy_timeout(config.busy_timeout)
            .map_err(|e| connection_error(e.into()))?;

        log::debug!(
            "opened database {} (busy timeout {}ms, read-only: {})",
            config.path.display(),
            config.busy_timeout.as_millis(),
            config.read_only
        );

        Ok(Self { conn, config })
    }

    /// Creates the `Registration` table if it does not exist yet.
    ///
    /// Idempotent; safe to call after every open.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Schema`] if the DDL statement fails.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn
            .execute(CREATE_REGISTRATION_TABLE, [])
            .map_err(Error::Schema)?;
        log::debug!("schema ensured for {}", self.config.path.display());
        Ok(())
    }

    /// Closes the connection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if `SQLite` refuses to close the
    /// connection; the handle is released either way.
    pub fn close(self) -> Result<()> {
        let path = self.config.path;
        self.conn.close().map_err(|(_, e)| Error::Storage(e))?;
        log::debug!("closed database {}", path.display());
        Ok(())
    }

    /// Returns the path of the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Returns a reference to the underlying `SQLite` connection.
    ///
    /// This provides access to the raw connection for advanced operations.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_open_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("registration.db");
        let config = DatabaseConfig::new(&path);

        let db = Database::open(config).unwrap();
        assert!(path.exists());
        assert_eq!(db.path(), path.as_path());
    }

    #[test]
    fn test_database_auto_create_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("subdir").join("registration.db");

        assert!(!path.parent().unwrap().exists());

        let _db = Database::open(DatabaseConfig::new(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_missing_file_read_only_is_connection_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.db");

        let err = Database::open(DatabaseConfig::new(&path).read_only()).unwrap_err();
        assert!(err.is_connection());
        assert!(!path.exists());
    }

    #[test]
    fn test_oversized_busy_timeout_is_connection_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("r.db");
        let config = DatabaseConfig::new(&path)
            .with_busy_timeout(std::time::Duration::from_secs(3_000_000));

        let err = Database::open(config).unwrap_err();
        assert!(err.is_connection());
        assert!(err.to_string().contains("busy timeout"));
        assert!(!path.parent().unwrap().exists());
    }

    #[test]
    fn test_largest_busy_timeout_is_accepted() {
        let dir = tempdir().unwrap();
        let config = DatabaseConfig::new(dir.path().join("r.db"))
            .with_busy_timeout(std::time::Duration::from_secs(MAX_BUSY_TIMEOUT_SECONDS));

        Database::open(config).unwrap().close().unwrap();
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let dir = tempdir().unwrap();
        let db = Database::open(DatabaseConfig::new(dir.path().join("r.db"))).unwrap();

        db.ensure_schema().unwrap();
        db.ensure_schema().unwrap();

        let tables: i64 = db
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'Registration'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("r.db");
        {
            let db = Database::open(DatabaseConfig::new(&path)).unwrap();
            db.ensure_schema().unwrap();
            db.close().unwrap();
        }

        let db = Database::open(DatabaseConfig::new(&path).read_only()).unwrap();
        let result = db.connection().execute("CREATE TABLE other (id INTEGER)", []);
        assert!(result.is_err());
    }

    #[test]
    fn test_close() {
        let dir = tempdir().unwrap();
        let db = Database::open(DatabaseConfig::new(dir.path().join("r.db"))).unwrap();
        db.close().unwrap();
    }
}
