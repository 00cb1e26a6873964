// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Demonstration driver
//!
//! Polls a sequence the way a firmware main loop would: print the
//! current step, advance, and stop once the sequence reports completion.

use crate::output::{self, OutputFormat, StepLine};
use std::io::{self, Write};
use stepseq_core::{Event, StepSequence};
use tracing::{debug, info};

/// Print every step until the sequence completes.
///
/// Returns the number of lines written. A sequence that is already
/// complete prints nothing.
pub fn run<W: Write>(seq: &mut StepSequence, out: &mut W, format: OutputFormat) -> io::Result<u32> {
    let mut printed = 0;

    while !seq.is_complete() {
        output::write_line(out, &StepLine::from(&*seq), format)?;
        printed += 1;

        for event in seq.next_step() {
            log_event(&event);
        }
    }

    out.flush()?;
    Ok(printed)
}

fn log_event(event: &Event) {
    match event {
        Event::SequenceCompleted { .. } => info!(event = %event, "sequence wrapped"),
        _ => debug!(event = %event, "transition"),
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
