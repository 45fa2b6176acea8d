//! Database configuration and connection parameters.
//!
//! This module provides configuration types for database connections,
//! including the default file location and connection parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name of the database when no path is configured.
pub const DEFAULT_DATABASE_FILE: &str = "registration.db";

/// Busy timeout applied when none is configured.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Largest busy timeout `SQLite` accepts, in whole seconds (`i32::MAX` ms).
pub const MAX_BUSY_TIMEOUT_SECONDS: u64 = 2_147_483;

/// Configuration for database connections.
///
/// This struct contains all parameters needed to open and configure
/// a database connection: the database file path, the busy timeout
/// and the access mode.
///
/// # Examples
///
/// ```
/// use registrar::database::DatabaseConfig;
/// use std::time::Duration;
///
/// // Create a configuration with default settings
/// let config = DatabaseConfig::new("/tmp/registration.db");
///
/// // Customize the configuration
/// let config = DatabaseConfig::new("/tmp/registration.db")
///     .with_busy_timeout(Duration::from_millis(10000));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to create the database file (and its directory) if missing.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    /// - `read_only`: false
    ///
    /// # Examples
    ///
    /// ```
    /// use registrar::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::new("/tmp/registration.db");
    /// assert_eq!(config.path.to_str().unwrap(), "/tmp/registration.db");
    /// ```
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout duration.
    ///
    /// The busy timeout determines how long the connection waits on a
    /// database locked by another process before returning an error.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Configures the database to be opened in read-only mode.
    ///
    /// When read-only is enabled, `auto_create` is automatically disabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use registrar::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::new("/tmp/registration.db").read_only();
    /// assert!(config.read_only);
    /// assert!(!config.auto_create);
    /// ```
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(default_database_path())
    }
}

/// Returns the database path used when nothing else is configured:
/// `registration.db` in the current directory.
#[must_use]
pub fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_FILE)
}
