// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! stepseq-core: step sequence counter
//!
//! This crate provides:
//! - A pure state machine for bounded cyclic step sequences
//! - Events describing each transition, with structured tracing fields
//! - TOML configuration for building sequences

pub mod config;
pub mod error;
pub mod traced;

// State machines
pub mod effect;
pub mod sequence;

// Re-exports
pub use config::{SequenceConfig, CONFIG_FILE_NAME, DEFAULT_STEPS};
pub use effect::Event;
pub use error::{ConfigError, SequenceError};
pub use sequence::{PendingSequence, SequenceEvent, StepSequence};
pub use traced::Traced;
