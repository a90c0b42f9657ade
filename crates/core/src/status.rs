// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote build states and the published status snapshot.

use serde::{Deserialize, Serialize};

/// History entries kept per project in a status snapshot.
pub const MAX_BUILD_LOGS: usize = 7;

/// Build state as reported by the build service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildStatus {
    StatusUnknown,
    Pending,
    Queued,
    Working,
    Success,
    Failure,
    InternalError,
    Timeout,
    Cancelled,
    Expired,
    #[serde(other)]
    Unrecognized,
}

impl BuildStatus {
    /// Only these states count as a result; everything else is skipped.
    pub fn is_terminal(self) -> bool {
        matches!(self, BuildStatus::Success | BuildStatus::Failure | BuildStatus::Timeout)
    }

    pub fn is_success(self) -> bool {
        self == BuildStatus::Success
    }
}

/// The subset of a remote build the aggregator looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteBuild {
    pub id: String,
    pub status: BuildStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<String>,
}

/// One finished build in a project's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub build_id: String,
    pub finish_time: String,
    pub success: bool,
}

/// Pointer to a build, used for `last_successful_build`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRef {
    pub build_id: String,
    pub finish_time: String,
}

/// Position of a project in the published listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusRank {
    Failing,
    Succeeding,
    NeverBuilt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStatus {
    pub name: String,
    /// Newest first, at most [`MAX_BUILD_LOGS`] entries
    pub history: Vec<HistoryEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_successful_build: Option<BuildRef>,
}

impl ProjectStatus {
    /// Outcome of the newest finished build, if there is one.
    pub fn latest_success(&self) -> Option<bool> {
        self.history.first().map(|entry| entry.success)
    }

    pub fn rank(&self) -> StatusRank {
        match self.latest_success() {
            Some(false) => StatusRank::Failing,
            Some(true) => StatusRank::Succeeding,
            None => StatusRank::NeverBuilt,
        }
    }
}

/// Contents of `status.json` / `status-coverage.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub projects: Vec<ProjectStatus>,
}

/// Order failures first, then successes, then projects never built.
///
/// The sort is stable, so projects keep their incoming order within a rank.
pub fn sort_projects(projects: &mut [ProjectStatus]) {
    projects.sort_by_key(ProjectStatus::rank);
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
