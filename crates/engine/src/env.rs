// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine crate.

use crate::error::EngineError;
use crate::settings::{parse_gcb_options, Settings};
use fb_adapters::{ServiceAccountKey, TokenSource};
use std::path::{Path, PathBuf};

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Build options from `GCB_OPTIONS` (YAML), if set
pub fn gcb_options() -> Result<Option<serde_json::Value>, EngineError> {
    non_empty("GCB_OPTIONS").map(|raw| parse_gcb_options(&raw)).transpose()
}

/// Service account key file used to sign upload urls
pub fn credentials_path() -> Result<PathBuf, EngineError> {
    non_empty("GOOGLE_APPLICATION_CREDENTIALS")
        .map(PathBuf::from)
        .ok_or(EngineError::Config {
            name: "GOOGLE_APPLICATION_CREDENTIALS",
            message: "not set; a service account key is required to sign upload urls".to_string(),
        })
}

/// Bearer token source, first match wins: `FB_ACCESS_TOKEN`, the key in
/// `GOOGLE_APPLICATION_CREDENTIALS`, then the metadata server
pub fn token_source() -> Result<TokenSource, EngineError> {
    if let Some(token) = non_empty("FB_ACCESS_TOKEN") {
        return Ok(TokenSource::Static(token));
    }
    match non_empty("GOOGLE_APPLICATION_CREDENTIALS") {
        Some(path) => Ok(TokenSource::ServiceAccount(ServiceAccountKey::from_file(
            Path::new(&path),
        )?)),
        None => Ok(TokenSource::Metadata),
    }
}

/// Local JSON entity store used instead of Datastore when set
pub fn state_file() -> Option<PathBuf> {
    non_empty("FB_STATE_FILE").map(PathBuf::from)
}

/// Settings with `FB_*` overrides applied over the production defaults
pub fn settings() -> Result<Settings, EngineError> {
    let mut settings = Settings::default();
    if let Some(project) = non_empty("FB_IMAGE_PROJECT") {
        settings.image_project = project;
    }
    if let Some(bucket) = non_empty("FB_STATUS_BUCKET") {
        settings.status_bucket = bucket;
    }
    if let Some(bucket) = non_empty("FB_LOGS_BUCKET") {
        settings.logs_bucket = bucket;
    }
    settings.gcb_options = gcb_options()?;
    Ok(settings)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
