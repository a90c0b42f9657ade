// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dockerfile inspection.

use regex::Regex;
use std::sync::LazyLock;

/// Working directory used when the Dockerfile sets none.
pub const DEFAULT_WORKDIR: &str = "/src";

/// Matches a `WORKDIR <path>` directive at the start of a line.
#[allow(clippy::expect_used)]
static WORKDIR_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*WORKDIR\s*(\S+)").expect("constant regex pattern is valid"));

/// The argument of the first `WORKDIR` directive, if any.
///
/// `$` is doubled so the build service does not treat the path as one of
/// its own substitution variables.
pub fn workdir_from_dockerfile(dockerfile: &str) -> Option<String> {
    dockerfile
        .lines()
        .find_map(|line| WORKDIR_DIRECTIVE.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace('$', "$$"))
}

/// [`workdir_from_dockerfile`], falling back to [`DEFAULT_WORKDIR`].
pub fn workdir_or_default(dockerfile: &str) -> String {
    workdir_from_dockerfile(dockerfile).unwrap_or_else(|| DEFAULT_WORKDIR.to_string())
}

#[cfg(test)]
#[path = "dockerfile_tests.rs"]
mod tests;
