// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON file store for running without a hosted datastore.
//!
//! The whole state is rewritten on every mutation: serialized to a sibling
//! `.tmp` file and renamed over the original, so a crash mid-write leaves
//! the previous contents intact.

use crate::state::StoreState;
use crate::store::{EntityStore, StorageError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fb_core::{BuildRecord, BuildTag, LastSuccessfulBuild};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Current on-disk schema version
pub const CURRENT_STORE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    #[serde(rename = "v")]
    version: u32,
    updated_at: DateTime<Utc>,
    state: StoreState,
}

pub struct FileStore {
    path: PathBuf,
    state: Mutex<StoreState>,
}

impl FileStore {
    /// Open the store at `path`; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let state = match fs::read(&path) {
            Ok(bytes) => {
                let file: StoreFile = serde_json::from_slice(&bytes)?;
                if file.version != CURRENT_STORE_VERSION {
                    return Err(StorageError::Version(file.version));
                }
                tracing::info!(
                    path = %path.display(),
                    build_records = file.state.build_records.len(),
                    last_successful_builds = file.state.last_successful_builds.len(),
                    "loaded entity store"
                );
                file.state
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no entity store found, starting empty");
                StoreState::default()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, state: Mutex::new(state) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn mutate(&self, apply: impl FnOnce(&mut StoreState)) -> Result<(), StorageError> {
        let mut state = self.state.lock();
        let mut next = state.clone();
        apply(&mut next);
        write_atomic(&self.path, &next)?;
        *state = next;
        Ok(())
    }
}

fn write_atomic(path: &Path, state: &StoreState) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = StoreFile {
        version: CURRENT_STORE_VERSION,
        updated_at: Utc::now(),
        state: state.clone(),
    };
    let tmp = path.with_extension("tmp");
    {
        let mut out = fs::File::create(&tmp)?;
        serde_json::to_writer_pretty(&mut out, &file)?;
        out.write_all(b"\n")?;
        out.sync_all()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

#[async_trait]
impl EntityStore for FileStore {
    async fn build_records(&self, tag: BuildTag) -> Result<Vec<BuildRecord>, StorageError> {
        Ok(self.state.lock().build_records(tag))
    }

    async fn build_record(
        &self,
        project: &str,
        tag: BuildTag,
    ) -> Result<Option<BuildRecord>, StorageError> {
        Ok(self.state.lock().build_record(project, tag))
    }

    async fn put_build_record(&self, record: &BuildRecord) -> Result<(), StorageError> {
        self.mutate(|state| state.put_build_record(record))
    }

    async fn last_successful_build(
        &self,
        project: &str,
        tag: BuildTag,
    ) -> Result<Option<LastSuccessfulBuild>, StorageError> {
        Ok(self.state.lock().last_successful_build(project, tag))
    }

    async fn upsert_last_successful_build(
        &self,
        build: &LastSuccessfulBuild,
    ) -> Result<(), StorageError> {
        self.mutate(|state| state.upsert_last_successful_build(build))
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
