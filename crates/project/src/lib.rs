// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fb-project: Loading project directories (project.yaml and Dockerfile)

mod dockerfile;
mod load;
mod yaml;

pub use dockerfile::{workdir_from_dockerfile, workdir_or_default, DEFAULT_WORKDIR};
pub use load::{load_project, project_name, Project, ProjectError, DOCKERFILE, PROJECT_YAML};
pub use yaml::{parse_project_yaml, ProjectYaml};
