// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use fb_engine::EngineError;
use std::fmt;

/// Exit code for bad invocations and bad configuration.
pub const EXIT_USAGE: i32 = 1;
/// Exit code when a remote call or storage operation fails.
pub const EXIT_FAILURE: i32 = 2;
/// Exit code when a finished build has no log.
pub const EXIT_MISSING_LOG: i32 = 3;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

impl From<EngineError> for ExitError {
    fn from(err: EngineError) -> Self {
        let code = match &err {
            EngineError::Project(_) | EngineError::Config { .. } => EXIT_USAGE,
            EngineError::MissingBuildLog { .. } => EXIT_MISSING_LOG,
            EngineError::Adapter(_) | EngineError::Storage(_) | EngineError::Json(_) => {
                EXIT_FAILURE
            }
        };
        Self::new(code, err.to_string())
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
