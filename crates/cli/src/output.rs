// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for driver lines

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use stepseq_core::StepSequence;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One printed line of a driver run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepLine {
    pub step: u16,
    pub num_steps: u16,
}

impl From<&StepSequence> for StepLine {
    fn from(seq: &StepSequence) -> Self {
        Self {
            step: seq.current_step(),
            num_steps: seq.num_steps(),
        }
    }
}

impl fmt::Display for StepLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step: {}", self.step)
    }
}

/// Write a value as a single line in the specified format
pub fn write_line<W, T>(out: &mut W, value: &T, format: OutputFormat) -> io::Result<()>
where
    W: Write,
    T: Serialize + fmt::Display,
{
    match format {
        OutputFormat::Text => writeln!(out, "{}", value),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, value)?;
            writeln!(out)
        }
    }
}
