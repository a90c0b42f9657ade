// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fuzzing engines and their static capability table.

use crate::sanitizer::Sanitizer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an engine's builds are uploaded and which sanitizers it can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineInfo {
    pub upload_bucket: &'static str,
    pub supported_sanitizers: &'static [Sanitizer],
}

/// Fuzzing engine identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuzzingEngine {
    Libfuzzer,
    Afl,
    Honggfuzz,
    /// Plain build without an engine, used for reproduction only.
    #[serde(rename = "none")]
    NoEngine,
}

impl FuzzingEngine {
    /// Engines built when project.yaml does not list any.
    pub const DEFAULT: [FuzzingEngine; 3] = [
        FuzzingEngine::Libfuzzer,
        FuzzingEngine::Afl,
        FuzzingEngine::Honggfuzz,
    ];

    pub const fn info(self) -> EngineInfo {
        match self {
            FuzzingEngine::Libfuzzer => EngineInfo {
                upload_bucket: "clusterfuzz-builds",
                supported_sanitizers: &[
                    Sanitizer::Address,
                    Sanitizer::Memory,
                    Sanitizer::Undefined,
                    Sanitizer::Coverage,
                ],
            },
            FuzzingEngine::Afl => EngineInfo {
                upload_bucket: "clusterfuzz-builds-afl",
                supported_sanitizers: &[Sanitizer::Address],
            },
            FuzzingEngine::Honggfuzz => EngineInfo {
                upload_bucket: "clusterfuzz-builds-honggfuzz",
                supported_sanitizers: &[
                    Sanitizer::Address,
                    Sanitizer::Memory,
                    Sanitizer::Undefined,
                ],
            },
            FuzzingEngine::NoEngine => EngineInfo {
                upload_bucket: "clusterfuzz-builds-no-engine",
                supported_sanitizers: &[Sanitizer::Address],
            },
        }
    }

    pub fn supports(self, sanitizer: Sanitizer) -> bool {
        self.info().supported_sanitizers.contains(&sanitizer)
    }

    pub const fn upload_bucket(self) -> &'static str {
        self.info().upload_bucket
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FuzzingEngine::Libfuzzer => "libfuzzer",
            FuzzingEngine::Afl => "afl",
            FuzzingEngine::Honggfuzz => "honggfuzz",
            FuzzingEngine::NoEngine => "none",
        }
    }

    /// `FUZZING_ENGINE=<name>` for the compile environment.
    pub fn env(self) -> String {
        format!("FUZZING_ENGINE={}", self.as_str())
    }
}

impl fmt::Display for FuzzingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "fuzzing_engine_tests.rs"]
mod tests;
