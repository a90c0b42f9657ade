// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entity store abstraction.
//!
//! Both entity kinds are keyed by `{project}-{build_tag}`. Writes are
//! whole-entity upserts: writing the same value twice leaves the store as
//! writing it once. There is no optimistic concurrency; the last writer wins.

use async_trait::async_trait;
use fb_core::{BuildRecord, BuildTag, LastSuccessfulBuild};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported store version {0}")]
    Version(u32),
    #[error("{operation} failed: {message}")]
    Backend { operation: &'static str, message: String },
}

#[async_trait]
pub trait EntityStore: Send + Sync {
    /// All build records for `tag`, ordered by project name.
    async fn build_records(&self, tag: BuildTag) -> Result<Vec<BuildRecord>, StorageError>;

    async fn build_record(
        &self,
        project: &str,
        tag: BuildTag,
    ) -> Result<Option<BuildRecord>, StorageError>;

    /// Create or replace a build record.
    async fn put_build_record(&self, record: &BuildRecord) -> Result<(), StorageError>;

    async fn last_successful_build(
        &self,
        project: &str,
        tag: BuildTag,
    ) -> Result<Option<LastSuccessfulBuild>, StorageError>;

    /// Create or replace the last successful build for its project and tag.
    async fn upsert_last_successful_build(
        &self,
        build: &LastSuccessfulBuild,
    ) -> Result<(), StorageError>;
}

/// Append `build_id` to the project's record for `tag`, creating it if needed.
pub async fn record_build<S: EntityStore + ?Sized>(
    store: &S,
    project: &str,
    tag: BuildTag,
    build_id: &str,
) -> Result<BuildRecord, StorageError> {
    let mut record =
        store.build_record(project, tag).await?.unwrap_or_else(|| BuildRecord::new(project, tag));
    record.push(build_id);
    store.put_build_record(&record).await?;
    tracing::debug!(
        project,
        tag = %tag,
        build_id,
        history = record.build_ids.len(),
        "recorded build"
    );
    Ok(record)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
