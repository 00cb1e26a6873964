//! Shared helpers for stepseq specs.

#![allow(dead_code)]

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub use predicates::prelude::*;

/// A scratch working directory for running the binary.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// An empty directory with no config file.
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// A directory with `stepseq.toml` holding the given content.
    pub fn with_config(content: &str) -> Self {
        let project = Self::empty();
        project.file("stepseq.toml", content);
        project
    }

    pub fn file(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).expect("failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A `stepseq` command running inside this directory.
    pub fn stepseq(&self) -> CliRun {
        let mut cmd = Command::cargo_bin("stepseq").expect("stepseq binary not built");
        cmd.current_dir(self.dir.path()).env_remove("RUST_LOG");
        CliRun { cmd }
    }
}

pub struct CliRun {
    cmd: Command,
}

impl CliRun {
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> Outcome {
        Outcome(self.cmd.assert().success())
    }

    pub fn fails(mut self) -> Outcome {
        Outcome(self.cmd.assert().failure())
    }
}

pub struct Outcome(Assert);

impl Outcome {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stderr).into_owned()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        Self(self.0.stdout(predicate::str::contains(needle)))
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        Self(self.0.stderr(predicate::str::contains(needle)))
    }

    pub fn stdout_empty(self) -> Self {
        Self(self.0.stdout(predicate::str::is_empty()))
    }
}
