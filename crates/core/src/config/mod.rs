// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequence configuration
//!
//! Loaded from a TOML file of the form:
//!
//! ```toml
//! [sequence]
//! steps = 5
//! ```

use crate::error::{ConfigError, SequenceError};
use crate::sequence::StepSequence;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Step count used when nothing else is configured
pub const DEFAULT_STEPS: u16 = 5;

/// Conventional config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "stepseq.toml";

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequenceConfig {
    #[serde(default)]
    pub sequence: SequenceSection,
}

/// The `[sequence]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequenceSection {
    /// Number of steps in one cycle
    #[serde(default = "default_steps")]
    pub steps: u16,
}

impl Default for SequenceSection {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
        }
    }
}

fn default_steps() -> u16 {
    DEFAULT_STEPS
}

impl SequenceConfig {
    /// Configuration for a given step count
    pub fn with_steps(steps: u16) -> Self {
        Self {
            sequence: SequenceSection { steps },
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path.to_path_buf())
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, PathBuf::from("<string>"))
    }

    fn parse(content: &str, path: PathBuf) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Create and initialize a sequence from this configuration
    pub fn build(&self) -> Result<StepSequence, SequenceError> {
        StepSequence::create().init(self.sequence.steps)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
