// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step sequence state machine
//!
//! A step sequence is a bounded modular counter with a completion flag.
//! It advances one step at a time and reports completion on the single
//! advance that wraps the last step back to zero.
//!
//! Lifecycle is encoded in the types: [`StepSequence::create`] yields a
//! [`PendingSequence`] that can only be initialized, and an initialized
//! [`StepSequence`] is released when dropped.

use crate::effect::Event;
use crate::error::SequenceError;
use std::num::NonZeroU16;
use tracing::debug;

/// A created sequence that has not been given a step count yet
#[derive(Debug, Default)]
#[must_use = "a pending sequence does nothing until it is initialized"]
pub struct PendingSequence {
    _private: (),
}

impl PendingSequence {
    /// Initialize with the number of steps in one cycle
    pub fn init(self, num_steps: u16) -> Result<StepSequence, SequenceError> {
        let num_steps = NonZeroU16::new(num_steps).ok_or(SequenceError::ZeroSteps)?;
        debug!(num_steps = num_steps.get(), "sequence initialized");
        Ok(StepSequence {
            num_steps,
            current_step: 0,
            complete: false,
        })
    }
}

/// Events that can change sequence state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceEvent {
    /// Move forward by exactly one step
    Advance,
    /// Return to step zero and clear completion
    Reset,
}

/// A bounded cyclic step counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence {
    num_steps: NonZeroU16,
    current_step: u16,
    complete: bool,
}

impl StepSequence {
    /// Create an uninitialized sequence
    pub fn create() -> PendingSequence {
        PendingSequence::default()
    }

    /// Create and initialize a sequence in one go
    pub fn new(num_steps: u16) -> Result<Self, SequenceError> {
        Self::create().init(num_steps)
    }

    /// Re-initialize in place with a new step count.
    ///
    /// On error the sequence is left unchanged.
    pub fn init(&mut self, num_steps: u16) -> Result<Vec<Event>, SequenceError> {
        *self = Self::new(num_steps)?;
        Ok(vec![Event::SequenceInitialized { num_steps }])
    }

    pub fn current_step(&self) -> u16 {
        self.current_step
    }

    pub fn num_steps(&self) -> u16 {
        self.num_steps.get()
    }

    /// True iff the most recent advance wrapped the last step back to zero
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Advance by one step
    pub fn next_step(&mut self) -> Vec<Event> {
        self.apply(SequenceEvent::Advance)
    }

    /// Return to step zero; the step count is kept
    pub fn reset(&mut self) -> Vec<Event> {
        self.apply(SequenceEvent::Reset)
    }

    /// Apply an event in place
    pub fn apply(&mut self, event: SequenceEvent) -> Vec<Event> {
        let (next, events) = self.transition(event);
        *self = next;
        events
    }

    /// Pure transition function - returns new state and the events it produced
    pub fn transition(&self, event: SequenceEvent) -> (StepSequence, Vec<Event>) {
        let num_steps = self.num_steps.get();

        match event {
            SequenceEvent::Advance => {
                // current_step < num_steps <= u16::MAX, so this cannot overflow
                let incremented = self.current_step + 1;
                let to = incremented % num_steps;
                let complete = incremented / num_steps == 1;

                let mut events = vec![Event::StepAdvanced {
                    from: self.current_step,
                    to,
                    num_steps,
                }];
                if complete {
                    events.push(Event::SequenceCompleted { num_steps });
                }

                let seq = StepSequence {
                    current_step: to,
                    complete,
                    ..self.clone()
                };
                (seq, events)
            }

            SequenceEvent::Reset => {
                let seq = StepSequence {
                    current_step: 0,
                    complete: false,
                    ..self.clone()
                };
                let events = vec![Event::SequenceReset {
                    from: self.current_step,
                    num_steps,
                }];
                (seq, events)
            }
        }
    }
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
