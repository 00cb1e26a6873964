// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! stepseq - step sequence demonstration driver

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod completions;
mod driver;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use stepseq_core::{SequenceConfig, CONFIG_FILE_NAME};
use tracing::{debug, info};

use crate::completions::CompletionsArgs;
use crate::error::CliError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "stepseq",
    version,
    about = "Step through a fixed-length sequence until it wraps"
)]
struct Cli {
    /// Number of steps in the sequence (overrides the config file)
    #[arg(long, short = 's')]
    steps: Option<u16>,

    /// Path to a TOML config file [default: ./stepseq.toml if present]
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),
}

fn main() -> ExitCode {
    setup_logging();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(cli_err) => eprint!("{}", cli_err),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(Commands::Completions(args)) = cli.command {
        completions::generate_completions::<Cli>(args.shell);
        return Ok(());
    }

    let (config, origin) = resolve_config(cli.steps, cli.config.as_deref())?;
    debug!(steps = config.sequence.steps, origin = %origin, "resolved config");

    let mut seq = config
        .build()
        .map_err(|e| CliError::zero_steps(&origin, e))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let printed = driver::run(&mut seq, &mut out, cli.format)?;

    info!(printed, "sequence complete");
    Ok(())
}

/// Pick the step count source: flag, explicit config, local config, default.
fn resolve_config(
    steps: Option<u16>,
    config_path: Option<&Path>,
) -> Result<(SequenceConfig, String), CliError> {
    if let Some(steps) = steps {
        return Ok((SequenceConfig::with_steps(steps), "--steps".to_string()));
    }

    let local = Path::new(CONFIG_FILE_NAME);
    let path = match config_path {
        Some(path) => path,
        None if local.is_file() => local,
        None => return Ok((SequenceConfig::default(), "the default".to_string())),
    };

    let config = SequenceConfig::load(path).map_err(|e| CliError::config(path, e))?;
    Ok((config, path.display().to_string()))
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
