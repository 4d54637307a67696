//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated data directories
//! - Publishing a job data file
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use jobboard_types::JobRecord;

use crate::fixtures::to_json;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use jobboard_testing::{TestWorld, descending_jobs};
///
/// let world = TestWorld::new().with_jobs(&descending_jobs(3, 1_700_000_000));
///
/// let result = world.run(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    data_file: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".jobboard");
        let data_file = temp_dir.path().join("public").join("job_data.json");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        std::fs::create_dir_all(data_file.parent().expect("data file has parent"))
            .expect("Failed to create public dir");

        Self {
            temp_dir,
            data_dir,
            data_file,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path (.jobboard).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the published data file path (public/job_data.json).
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Publish `records` as the data file.
    pub fn with_jobs(self, records: &[JobRecord]) -> Self {
        std::fs::write(&self.data_file, to_json(records)).expect("Failed to write data file");
        self
    }

    /// Publish an arbitrary body as the data file.
    pub fn with_raw_data(self, body: &str) -> Self {
        std::fs::write(&self.data_file, body).expect("Failed to write data file");
        self
    }

    /// Write a file relative to the temp root and return its path.
    pub fn write_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// Points `--data-dir` at the isolated directory and `--source` at the
    /// published data file, and turns off the load-more delay.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--source")
            .arg(self.data_file());

        cmd.current_dir(self.temp_dir.path());
        cmd.env("JOBBOARD_LOAD_MORE_DELAY_MS", "0");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built in the cargo target directory (which cargo test does automatically).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("jobboard")
            .map_err(|e| anyhow::anyhow!("Failed to find jobboard binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
