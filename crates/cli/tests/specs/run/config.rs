//! Config file specs

use crate::prelude::*;

#[test]
fn local_config_sets_steps() {
    Project::with_config("[sequence]\nsteps = 2\n")
        .stepseq()
        .passes()
        .stdout_eq("Step: 0\nStep: 1\n");
}

#[test]
fn explicit_config_path_is_used() {
    let project = Project::empty();
    project.file("custom.toml", "[sequence]\nsteps = 3\n");

    project
        .stepseq()
        .args(["--config", "custom.toml"])
        .passes()
        .stdout_eq("Step: 0\nStep: 1\nStep: 2\n");
}

#[test]
fn steps_flag_overrides_config() {
    Project::with_config("[sequence]\nsteps = 9\n")
        .stepseq()
        .args(["--steps", "1"])
        .passes()
        .stdout_eq("Step: 0\n");
}

#[test]
fn empty_config_uses_default_steps() {
    Project::with_config("")
        .stepseq()
        .passes()
        .stdout_eq("Step: 0\nStep: 1\nStep: 2\nStep: 3\nStep: 4\n");
}
