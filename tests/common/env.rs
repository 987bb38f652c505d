//! Test environment for isolated legacy-promote runs.
//!
//! Every `TestEnv` owns a temporary project root and a temporary config
//! home, so user configuration on the host never leaks into a test.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Number of confirmation questions printed on stdout
    pub fn prompt_count(&self) -> usize {
        self.stdout.matches("Overwrite?").count()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the project (holds `dist/` and `legacy/`)
    pub project_root: TempDir,
    /// Temporary directory used as HOME and XDG_CONFIG_HOME
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create project dir"),
            config_home: tempfile::tempdir().expect("Failed to create config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_legacy-promote")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file below the project root, creating parents
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write a staged build artifact (`dist/<relative>`)
    pub fn stage(&self, relative_path: &str, content: &str) {
        self.write_project_file(&format!("dist/{relative_path}"), content);
    }

    /// Write an already archived file (`legacy/<relative>`)
    pub fn archive(&self, relative_path: &str, content: &str) {
        self.write_project_file(&format!("legacy/{relative_path}"), content);
    }

    /// Read an archived file, `None` if absent
    pub fn read_archived(&self, relative_path: &str) -> Option<String> {
        std::fs::read_to_string(self.project_path(&format!("legacy/{relative_path}"))).ok()
    }

    /// Write the user-level config file
    pub fn write_user_config(&self, content: &str) {
        let path = self.config_home.path().join("legacy-promote/config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    /// Run the CLI from the project root with closed stdin
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_full(self.project_root.path(), args, &[], None)
    }

    /// Run the CLI from the project root, feeding `input` on stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        self.run_full(self.project_root.path(), args, &[], Some(input))
    }

    /// Run the CLI from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_full(self.project_root.path(), args, env_vars, None)
    }

    pub fn run_full(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
        input: Option<&str>,
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("LEGACY_PROMOTE_MODE")
            .env_remove("LEGACY_PROMOTE_STAGING")
            .env_remove("LEGACY_PROMOTE_ARCHIVE")
            .env_remove("LEGACY_PROMOTE_ATOMIC_COPIES")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to execute legacy-promote");
        if let Some(input) = input {
            let mut stdin = child.stdin.take().expect("stdin is piped");
            stdin
                .write_all(input.as_bytes())
                .expect("Failed to write stdin");
        }

        let output = child.wait_with_output().expect("Failed to wait for legacy-promote");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
