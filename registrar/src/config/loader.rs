//! Configuration file discovery and loading.
//!
//! A configuration file is either given explicitly or discovered as
//! `registrar.yaml` in the working directory.

use crate::config::schema::Config;
use crate::database::MAX_BUSY_TIMEOUT_SECONDS;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "registrar.yaml";

/// A parsed configuration together with the file it came from.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use registrar::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load(None, Path::new(".")).unwrap();
/// println!("database: {:?}", config.database);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the effective configuration.
    ///
    /// An explicit path must exist. Without one, `registrar.yaml` in
    /// `working_dir` is used if present, otherwise the empty default.
    /// A relative `database` path is resolved against the directory of
    /// the file it was read from.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read, parsed
    /// or validated.
    pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<Config> {
        let source = match explicit {
            Some(path) => Some(Self::load_source(path)?),
            None => Self::discover(working_dir)?,
        };

        let Some(source) = source else {
            return Ok(Config::default());
        };

        let mut config = source.config;
        if let Some(database) = config.database.take() {
            let base = source.path.parent().unwrap_or_else(|| Path::new(""));
            config.database = Some(base.join(database));
        }
        Ok(config)
    }

    /// Looks for `registrar.yaml` in `working_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn discover(working_dir: &Path) -> Result<Option<ConfigSource>> {
        let candidate = working_dir.join(CONFIG_FILE_NAME);
        if !candidate.is_file() {
            return Ok(None);
        }
        Self::load_source(&candidate).map(Some)
    }

    /// Load, parse and validate a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the YAML is invalid,
    /// or a value fails validation.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;

        // An empty file is a valid, empty configuration.
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config =
            serde_yaml::from_str(&contents).map_err(|source| Error::Configuration {
                path: path.to_path_buf(),
                source,
            })?;
        validate(&config)?;
        Ok(config)
    }

    fn load_source(path: &Path) -> Result<ConfigSource> {
        log::debug!("loading configuration from {}", path.display());
        Ok(ConfigSource {
            path: path.to_path_buf(),
            config: Self::load_file(path)?,
        })
    }
}

fn validate(config: &Config) -> Result<()> {
    if let Some(ref database) = config.database {
        if database.as_os_str().is_empty() {
            return Err(Error::Validation {
                field: "database".into(),
                message: "must not be empty".into(),
            });
        }
    }

    if let Some(seconds) = config.busy_timeout_seconds {
        if seconds > MAX_BUSY_TIMEOUT_SECONDS {
            return Err(Error::Validation {
                field: "busy_timeout_seconds".into(),
                message: format!("must be at most {MAX_BUSY_TIMEOUT_SECONDS}"),
            });
        }
    }
    Ok(())
}
