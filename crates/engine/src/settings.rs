// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Where builds run and where their results are published.

use crate::error::EngineError;

pub const IMAGE_PROJECT: &str = "oss-fuzz";
pub const BASE_IMAGE_PROJECT: &str = "oss-fuzz-base";
pub const STATUS_BUCKET: &str = "oss-fuzz-build-logs";
pub const GCB_LOGS_BUCKET: &str = "oss-fuzz-gcb-logs";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Cloud project that runs project builds and holds the entity store
    pub image_project: String,
    /// Cloud project that runs base image builds
    pub base_image_project: String,
    /// Bucket receiving status JSON, badges and mirrored logs
    pub status_bucket: String,
    /// Bucket the build service writes logs to
    pub logs_bucket: String,
    /// Build options passed through to every build request
    pub gcb_options: Option<serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            image_project: IMAGE_PROJECT.to_string(),
            base_image_project: BASE_IMAGE_PROJECT.to_string(),
            status_bucket: STATUS_BUCKET.to_string(),
            logs_bucket: GCB_LOGS_BUCKET.to_string(),
            gcb_options: None,
        }
    }
}

/// Parse build options given as YAML (JSON is valid YAML).
pub fn parse_gcb_options(raw: &str) -> Result<serde_json::Value, EngineError> {
    serde_yaml::from_str(raw)
        .map_err(|e| EngineError::Config { name: "GCB_OPTIONS", message: e.to_string() })
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
