// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sanitizers a project can be compiled with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sanitizer: {0}")]
pub struct UnknownSanitizer(pub String);

/// Sanitizer identity.
///
/// The set is closed: a project naming anything else is a configuration
/// error, caught when project.yaml is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sanitizer {
    Address,
    Memory,
    Undefined,
    Coverage,
}

impl Sanitizer {
    /// Sanitizers built when project.yaml does not list any.
    pub const DEFAULT: [Sanitizer; 2] = [Sanitizer::Address, Sanitizer::Undefined];

    pub const fn as_str(self) -> &'static str {
        match self {
            Sanitizer::Address => "address",
            Sanitizer::Memory => "memory",
            Sanitizer::Undefined => "undefined",
            Sanitizer::Coverage => "coverage",
        }
    }

    /// `SANITIZER=<name>` for the compile environment.
    pub fn env(self) -> String {
        format!("SANITIZER={}", self.as_str())
    }
}

impl fmt::Display for Sanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sanitizer {
    type Err = UnknownSanitizer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "address" => Ok(Sanitizer::Address),
            "memory" => Ok(Sanitizer::Memory),
            "undefined" => Ok(Sanitizer::Undefined),
            "coverage" => Ok(Sanitizer::Coverage),
            other => Err(UnknownSanitizer(other.to_string())),
        }
    }
}

/// A sanitizer listed in project.yaml, with whatever options were attached.
///
/// ```yaml
/// sanitizers:
///   - address
///   - memory:
///       experimental: true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SanitizerEntry {
    pub sanitizer: Sanitizer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

impl SanitizerEntry {
    pub fn new(sanitizer: Sanitizer) -> Self {
        Self {
            sanitizer,
            options: None,
        }
    }

    pub fn with_options(sanitizer: Sanitizer, options: serde_json::Value) -> Self {
        Self {
            sanitizer,
            options: Some(options),
        }
    }
}

impl From<Sanitizer> for SanitizerEntry {
    fn from(sanitizer: Sanitizer) -> Self {
        Self::new(sanitizer)
    }
}

#[cfg(test)]
#[path = "sanitizer_tests.rs"]
mod tests;
