// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted build bookkeeping: build history and last successful build.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on build ids kept per project and tag.
pub const MAX_BUILD_HISTORY: usize = 64;

/// Which pipeline a build belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTag {
    Fuzzing,
    Coverage,
}

impl BuildTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            BuildTag::Fuzzing => "fuzzing",
            BuildTag::Coverage => "coverage",
        }
    }

    /// Name of the published status snapshot for this pipeline.
    pub const fn status_filename(self) -> &'static str {
        match self {
            BuildTag::Fuzzing => "status.json",
            BuildTag::Coverage => "status-coverage.json",
        }
    }
}

impl fmt::Display for BuildTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite entity key `{project}-{build_tag}`.
pub fn entity_key(project: &str, tag: BuildTag) -> String {
    format!("{}-{}", project, tag)
}

/// Build ids submitted for a project under one tag, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRecord {
    pub project: String,
    pub build_tag: BuildTag,
    #[serde(default)]
    pub build_ids: Vec<String>,
}

impl BuildRecord {
    pub fn new(project: impl Into<String>, build_tag: BuildTag) -> Self {
        Self {
            project: project.into(),
            build_tag,
            build_ids: Vec::new(),
        }
    }

    pub fn key(&self) -> String {
        entity_key(&self.project, self.build_tag)
    }

    /// Append the newest build id, evicting the oldest past [`MAX_BUILD_HISTORY`].
    pub fn push(&mut self, build_id: impl Into<String>) {
        self.build_ids.push(build_id.into());
        if self.build_ids.len() > MAX_BUILD_HISTORY {
            let excess = self.build_ids.len() - MAX_BUILD_HISTORY;
            self.build_ids.drain(..excess);
        }
    }

    /// Build ids newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &str> {
        self.build_ids.iter().rev().map(String::as_str)
    }
}

/// Most recent successful build of a project under one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastSuccessfulBuild {
    pub project: String,
    pub build_tag: BuildTag,
    pub build_id: String,
    /// RFC 3339 timestamp as reported by the build service
    pub finish_time: String,
}

impl LastSuccessfulBuild {
    pub fn key(&self) -> String {
        entity_key(&self.project, self.build_tag)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
