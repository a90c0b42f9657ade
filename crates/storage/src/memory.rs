// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::state::StoreState;
use crate::store::{EntityStore, StorageError};
use async_trait::async_trait;
use fb_core::{BuildRecord, BuildTag, LastSuccessfulBuild};
use parking_lot::Mutex;
use std::sync::Arc;

/// Store held entirely in memory. Clones share state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<StoreState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: StoreState) -> Self {
        Self { inner: Arc::new(Mutex::new(state)) }
    }

    /// Copy of everything stored.
    pub fn state(&self) -> StoreState {
        self.inner.lock().clone()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn build_records(&self, tag: BuildTag) -> Result<Vec<BuildRecord>, StorageError> {
        Ok(self.inner.lock().build_records(tag))
    }

    async fn build_record(
        &self,
        project: &str,
        tag: BuildTag,
    ) -> Result<Option<BuildRecord>, StorageError> {
        Ok(self.inner.lock().build_record(project, tag))
    }

    async fn put_build_record(&self, record: &BuildRecord) -> Result<(), StorageError> {
        self.inner.lock().put_build_record(record);
        Ok(())
    }

    async fn last_successful_build(
        &self,
        project: &str,
        tag: BuildTag,
    ) -> Result<Option<LastSuccessfulBuild>, StorageError> {
        Ok(self.inner.lock().last_successful_build(project, tag))
    }

    async fn upsert_last_successful_build(
        &self,
        build: &LastSuccessfulBuild,
    ) -> Result<(), StorageError> {
        self.inner.lock().upsert_last_successful_build(build);
        Ok(())
    }
}
