// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors from generating, submitting or aggregating builds
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Project(#[from] fb_project::ProjectError),
    #[error(transparent)]
    Adapter(#[from] fb_adapters::AdapterError),
    #[error("storage error: {0}")]
    Storage(#[from] fb_storage::StorageError),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Missing build log file {log_name}")]
    MissingBuildLog { log_name: String },
    #[error("invalid {name}: {message}")]
    Config { name: &'static str, message: String },
}
