// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project status badges.

use std::fmt;

/// Pre-rendered badge images live here in the status bucket.
pub const BADGE_DIR: &str = "badge_images";

/// Per-project badges are copied here.
pub const DESTINATION_BADGE_DIR: &str = "badges";

/// Every badge is published in each of these formats.
pub const BADGE_IMAGE_TYPES: [&str; 2] = ["svg", "png"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    Building,
    CoverageFailing,
    Failing,
}

impl Badge {
    /// Pick the badge for a project's latest fuzzing and coverage outcomes.
    ///
    /// A fuzzing failure outranks a coverage failure.
    pub const fn select(fuzzing_ok: bool, coverage_ok: bool) -> Self {
        match (fuzzing_ok, coverage_ok) {
            (false, _) => Badge::Failing,
            (true, false) => Badge::CoverageFailing,
            (true, true) => Badge::Building,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Badge::Building => "building",
            Badge::CoverageFailing => "coverage_failing",
            Badge::Failing => "failing",
        }
    }

    /// Object name of the shared image for this badge.
    pub fn source_path(self, extension: &str) -> String {
        format!("{}/{}.{}", BADGE_DIR, self.as_str(), extension)
    }
}

/// Object name a project's badge is published under.
pub fn destination_path(project: &str, extension: &str) -> String {
    format!("{}/{}.{}", DESTINATION_BADGE_DIR, project, extension)
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "badge_tests.rs"]
mod tests;
