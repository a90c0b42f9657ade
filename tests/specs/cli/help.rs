// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Usage and help output.

use crate::prelude::*;

#[test]
fn no_args_prints_usage_and_exits_one() {
    cli().exits_with(1).stderr_has("Usage:");
}

#[test]
fn help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("build-project")
        .stdout_has("build-base-images")
        .stdout_has("update-status");
}

#[test]
fn build_project_help_shows_dry_run() {
    cli().args(&["build-project", "--help"]).passes().stdout_has("--dry-run");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn build_project_requires_a_directory() {
    cli().args(&["build-project"]).exits_with(1).stderr_has("<PROJECT_DIR>");
}

#[test]
fn unknown_command_exits_one() {
    cli().args(&["build-everything"]).exits_with(1);
}

#[test]
fn update_status_help_shows_tag_values() {
    cli()
        .args(&["update-status", "--help"])
        .passes()
        .stdout_has("--tag")
        .stdout_has("fuzzing")
        .stdout_has("coverage");
}

#[test]
fn update_status_rejects_unknown_tag() {
    cli()
        .args(&["update-status", "--tag", "nightly"])
        .exits_with(1)
        .stderr_has("nightly");
}
