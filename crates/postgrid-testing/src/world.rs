//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated site directory and data directory
//! - Placing a catalog and a config file
//! - Executing CLI commands against them

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::SAMPLE_POSTS;

/// Environment variables that would leak the developer's setup into a test
const ISOLATED_ENV: [&str; 3] = ["POSTGRID_CONFIG", "POSTGRID_PATH", "RUST_LOG"];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use postgrid_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_posts();
///
/// let result = world.run(&["grid"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    site_dir: PathBuf,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with no catalog and no config.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let site_dir = temp_dir.path().join("site");
        let data_dir = temp_dir.path().join(".postgrid");

        std::fs::create_dir_all(&site_dir).expect("Failed to create site dir");

        Self {
            temp_dir,
            site_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Directory holding `postgrid.toml` and `posts.json`; also the CWD of
    /// every command.
    pub fn site_dir(&self) -> &Path {
        &self.site_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.site_dir.join("postgrid.toml")
    }

    pub fn posts_path(&self) -> PathBuf {
        self.site_dir.join("posts.json")
    }

    /// Place the sample catalog as `posts.json`.
    pub fn with_sample_posts(self) -> Self {
        self.with_posts(SAMPLE_POSTS)
    }

    /// Place `json` as `posts.json`, verbatim.
    pub fn with_posts(self, json: &str) -> Self {
        std::fs::write(self.posts_path(), json).expect("Failed to write posts.json");
        self
    }

    /// Write `toml` as the site's `postgrid.toml`.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.config_path(), toml).expect("Failed to write postgrid.toml");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("postgrid")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(self.config_path())
            .arg("--data-dir")
            .arg(self.data_dir());

        cmd.current_dir(&self.site_dir);

        for key in ISOLATED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built, which cargo test does for the crate that owns it.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("postgrid")
            .map_err(|e| anyhow::anyhow!("Failed to find postgrid binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run with `--format json` and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        let result = self.run(&full)?;
        if !result.success() {
            anyhow::bail!(
                "postgrid {:?} failed: {}",
                args,
                result.stderr().trim_end()
            );
        }
        result.json()
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

    pub fn code(&self) -> Option<i32> {
        self.status.code()
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
