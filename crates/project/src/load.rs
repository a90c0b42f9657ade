// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project directory loading.

use crate::dockerfile::workdir_or_default;
use crate::yaml::parse_project_yaml;
use fb_core::ProjectDescriptor;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PROJECT_YAML: &str = "project.yaml";
pub const DOCKERFILE: &str = "Dockerfile";

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("cannot derive a project name from {0}")]
    NoName(PathBuf),
    #[error("missing {0}")]
    Missing(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// A project directory with its descriptor and build recipe.
#[derive(Debug, Clone)]
pub struct Project {
    pub dir: PathBuf,
    pub descriptor: ProjectDescriptor,
    /// Working directory for compile steps, already escaped for the build service
    pub workdir: String,
}

/// Project name implied by a directory path (its last component).
///
/// Trailing separators are ignored, so `projects/zlib/` names `zlib`.
pub fn project_name(dir: &Path) -> Option<String> {
    dir.components().next_back().and_then(|c| c.as_os_str().to_str()).map(str::to_string)
}

/// Load `project.yaml` and `Dockerfile` from `dir`.
///
/// Both files must exist; nothing is built from a half-described project.
pub fn load_project(dir: &Path) -> Result<Project, ProjectError> {
    let dir_name = project_name(dir)
        .filter(|name| !name.is_empty() && name != "." && name != "..")
        .ok_or_else(|| ProjectError::NoName(dir.to_path_buf()))?;

    let yaml_path = dir.join(PROJECT_YAML);
    let yaml = read(&yaml_path)?;
    let descriptor = parse_project_yaml(&yaml)
        .map_err(|source| ProjectError::Yaml { path: yaml_path.clone(), source })?
        .into_descriptor(&dir_name);

    let dockerfile_path = dir.join(DOCKERFILE);
    let dockerfile = read(&dockerfile_path)?;
    let workdir = workdir_or_default(&dockerfile);

    tracing::debug!(
        project = %descriptor.name,
        image = %descriptor.image,
        %workdir,
        "loaded project"
    );

    Ok(Project { dir: dir.to_path_buf(), descriptor, workdir })
}

fn read(path: &Path) -> Result<String, ProjectError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ProjectError::Missing(path.to_path_buf()),
        _ => ProjectError::Read { path: path.to_path_buf(), source },
    })
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
