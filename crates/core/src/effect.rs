// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events produced by sequence transitions

use crate::traced::Traced;
use serde::{Deserialize, Serialize};

/// Observable outcome of a sequence transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SequenceInitialized {
        num_steps: u16,
    },
    StepAdvanced {
        from: u16,
        to: u16,
        num_steps: u16,
    },
    /// The advance that wrapped the last step back to zero
    SequenceCompleted {
        num_steps: u16,
    },
    SequenceReset {
        from: u16,
        num_steps: u16,
    },
}

impl Event {
    /// Stable event name, e.g. "step:advanced"
    pub fn name(&self) -> &'static str {
        match self {
            Event::SequenceInitialized { .. } => "sequence:initialized",
            Event::StepAdvanced { .. } => "step:advanced",
            Event::SequenceCompleted { .. } => "sequence:completed",
            Event::SequenceReset { .. } => "sequence:reset",
        }
    }
}

impl Traced for Event {
    fn name(&self) -> &'static str {
        Event::name(self)
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Event::SequenceInitialized { num_steps } | Event::SequenceCompleted { num_steps } => {
                vec![("num_steps", num_steps.to_string())]
            }
            Event::StepAdvanced {
                from,
                to,
                num_steps,
            } => vec![
                ("from", from.to_string()),
                ("to", to.to_string()),
                ("num_steps", num_steps.to_string()),
            ],
            Event::SequenceReset { from, num_steps } => vec![
                ("from", from.to_string()),
                ("num_steps", num_steps.to_string()),
            ],
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())?;
        for (key, value) in Traced::fields(self) {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
