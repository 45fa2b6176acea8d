//! Configuration system for registrar.
//!
//! Settings come from an optional YAML file (`registrar.yaml` in the
//! working directory, or a file named explicitly). Command-line flags and
//! their environment variables override the file; built-in defaults fill
//! whatever is left.
//!
//! # Configuration Precedence
//!
//! 1. Command-line flags / environment variables (`REGISTRAR_*`)
//! 2. Configuration file
//! 3. Built-in defaults (`registration.db`, 5 second busy timeout, table output)
//!
//! # Examples
//!
//! ```no_run
//! use registrar::config::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::load(None, Path::new(".")).unwrap();
//! let db_config = config.database_config(None, None);
//! println!("database: {}", db_config.path.display());
//! ```

mod loader;
mod schema;

pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use schema::{Config, OutputFormat};

use std::path::PathBuf;
use std::time::Duration;

use crate::database::{default_database_path, DatabaseConfig};

impl Config {
    /// Builds the database configuration, letting explicit overrides win
    /// over values from the file.
    ///
    /// # Examples
    ///
    /// ```
    /// use registrar::config::Config;
    /// use std::path::PathBuf;
    /// use std::time::Duration;
    ///
    /// let config = Config {
    ///     database: Some(PathBuf::from("from-file.db")),
    ///     busy_timeout_seconds: Some(2),
    ///     ..Default::default()
    /// };
    ///
    /// let db = config.database_config(Some(PathBuf::from("flag.db")), None);
    /// assert_eq!(db.path, PathBuf::from("flag.db"));
    /// assert_eq!(db.busy_timeout, Duration::from_secs(2));
    /// ```
    #[must_use]
    pub fn database_config(
        &self,
        database_override: Option<PathBuf>,
        busy_timeout_override: Option<u64>,
    ) -> DatabaseConfig {
        let path = database_override
            .or_else(|| self.database.clone())
            .unwrap_or_else(default_database_path);

        let mut db_config = DatabaseConfig::new(path);
        if let Some(seconds) = busy_timeout_override.or(self.busy_timeout_seconds) {
            db_config = db_config.with_busy_timeout(Duration::from_secs(seconds));
        }
        db_config
    }
}
