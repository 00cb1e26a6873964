//! Error reporting specs

use crate::prelude::*;

#[test]
fn zero_steps_flag_fails_with_suggestion() {
    Project::empty()
        .stepseq()
        .args(["--steps", "0"])
        .fails()
        .stdout_empty()
        .stderr_has("zero steps")
        .stderr_has("suggestions:");
}

#[test]
fn zero_steps_in_config_names_the_file() {
    Project::with_config("[sequence]\nsteps = 0\n")
        .stepseq()
        .fails()
        .stderr_has("stepseq.toml");
}

#[test]
fn missing_config_file_fails() {
    Project::empty()
        .stepseq()
        .args(["--config", "nope.toml"])
        .fails()
        .stderr_has("Failed to load config 'nope.toml'");
}

#[test]
fn malformed_config_fails() {
    Project::with_config("[sequence]\nsteps = \"five\"\n")
        .stepseq()
        .fails()
        .stderr_has("Failed to load config")
        .stderr_has("[sequence] table");
}

#[test]
fn non_numeric_steps_flag_is_rejected() {
    Project::empty()
        .stepseq()
        .args(["--steps", "many"])
        .fails()
        .stderr_has("--steps");
}
