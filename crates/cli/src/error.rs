// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Each error carries:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use std::fmt;
use std::path::Path;
use stepseq_core::{ConfigError, SequenceError, CONFIG_FILE_NAME};

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Error for a sequence configured with no steps.
    pub fn zero_steps(origin: &str, source: SequenceError) -> Self {
        CliError::new("Cannot run a sequence with zero steps")
            .with_context(format!("Step count came from {}", origin))
            .with_context("A sequence needs at least one step to wrap around")
            .with_suggestion("Pass a positive count: stepseq --steps 5")
            .with_suggestion(format!(
                "Set `steps` to 1 or more in the [sequence] table of {}",
                CONFIG_FILE_NAME
            ))
            .with_source(source)
    }

    /// Error for a config file that could not be read or parsed.
    pub fn config(path: &Path, source: ConfigError) -> Self {
        let err = CliError::new(format!("Failed to load config '{}'", path.display()))
            .with_context(source.to_string());
        let err = match &source {
            ConfigError::Read { .. } => err
                .with_suggestion("Check that the file exists and is readable")
                .with_suggestion("Or skip the file: stepseq --steps <N>"),
            ConfigError::Parse { .. } => err
                .with_suggestion("The file must contain a [sequence] table with a `steps` key")
                .with_suggestion("`steps` must be between 1 and 65535"),
        };
        err.with_source(source)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
