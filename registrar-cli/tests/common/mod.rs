//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated working directory and database.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the database file
    pub db_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The database file is not created yet - registrar will create it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let db_path = temp_path.join("registration.db");

        Self {
            temp_dir,
            temp_path,
            db_path,
        }
    }

    /// Get a command builder without the `--database` flag.
    ///
    /// Runs inside the temp directory with every `REGISTRAR_*` variable
    /// cleared, so the default `./registration.db` lands in the temp dir.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("registrar").expect("Failed to find registrar binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("REGISTRAR_DATABASE")
            .env_remove("REGISTRAR_CONFIG")
            .env_remove("REGISTRAR_BUSY_TIMEOUT")
            .env_remove("REGISTRAR_OUTPUT_FORMAT")
            .env_remove("REGISTRAR_LOG_MODE");
        cmd
    }

    /// Get a command builder with `--database` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--database").arg(&self.db_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a record and return its id.
    ///
    /// # Panics
    /// Panics if the create command fails or doesn't print a valid id.
    pub fn create(&self, name: &str, email: &str, dob: Option<&str>) -> i64 {
        let mut cmd = self.command();
        cmd.arg("create").arg("--name").arg(name).arg("--email").arg(email);
        if let Some(dob) = dob {
            cmd.arg("--dob").arg(dob);
        }
        let output = cmd.output().expect("Failed to run create command");

        assert!(
            output.status.success(),
            "Create failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        stdout.trim().parse().expect("Output is not a valid id")
    }

    /// Read all records as parsed JSON.
    pub fn read_json(&self) -> Vec<serde_json::Value> {
        let output = self
            .command()
            .arg("read")
            .arg("--format")
            .arg("json")
            .output()
            .expect("Failed to run read command");

        assert!(
            output.status.success(),
            "Read failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("Read output is not JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
