//! Shared helpers for driving the deeperror binary

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A deeperror invocation with `RUST_LOG` cleared
pub struct TestCommand {
    cmd: Command,
}

impl TestCommand {
    pub fn new() -> Self {
        let mut cmd = Command::cargo_bin("deeperror").expect("Failed to find deeperror binary");
        cmd.env_remove("RUST_LOG");
        Self { cmd }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            self.cmd.arg(arg.as_ref());
        }
        self
    }

    pub fn arg<S: AsRef<str>>(mut self, arg: S) -> Self {
        self.cmd.arg(arg.as_ref());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn stdin<S: AsRef<str>>(mut self, input: S) -> Self {
        self.cmd.write_stdin(input.as_ref().to_string());
        self
    }

    pub fn expect_success(mut self) -> Output {
        Output(self.cmd.assert().success())
    }

    pub fn expect_failure(mut self) -> Output {
        Output(self.cmd.assert().failure())
    }
}

/// Chained output checks on a finished invocation
pub struct Output(Assert);

impl Output {
    pub fn stdout_eq<S: AsRef<str>>(self, text: S) -> Self {
        Self(self.0.stdout(text.as_ref().to_string()))
    }

    pub fn stdout_contains<S: AsRef<str>>(self, text: S) -> Self {
        Self(self.0.stdout(predicate::str::contains(text.as_ref())))
    }

    pub fn stdout_lacks<S: AsRef<str>>(self, text: S) -> Self {
        Self(self.0.stdout(predicate::str::contains(text.as_ref()).not()))
    }

    pub fn stderr_contains<S: AsRef<str>>(self, text: S) -> Self {
        Self(self.0.stderr(predicate::str::contains(text.as_ref())))
    }

    pub fn done(self) -> Assert {
        self.0
    }
}

/// Temporary directory holding an isolated configuration file
pub struct TestEnvironment {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl TestEnvironment {
    /// An environment whose configuration file does not exist yet
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config.toml");
        Self {
            temp_dir,
            config_path,
        }
    }

    pub fn with_config(contents: &str) -> Self {
        let env = Self::new();
        std::fs::write(&env.config_path, contents).expect("Failed to write config");
        env
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// A command pointed at this environment's configuration
    pub fn command(&self) -> TestCommand {
        TestCommand::new()
            .arg("--config")
            .arg(self.config_path.to_string_lossy())
    }
}
