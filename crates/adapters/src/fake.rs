// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory stand-ins for the cloud adapters.

use crate::cloudbuild::BuildService;
use crate::error::AdapterError;
use crate::gcs::{ObjectStore, Upload};
use crate::signer::UrlSigner;
use async_trait::async_trait;
use fb_core::{BuildRequest, RemoteBuild};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// A recorded `create_build` call
#[derive(Debug, Clone)]
pub struct CreatedBuild {
    pub project: String,
    pub build_id: String,
    pub request: BuildRequest,
}

#[derive(Default)]
struct FakeBuildState {
    created: Vec<CreatedBuild>,
    builds: HashMap<String, RemoteBuild>,
    fail_create: Option<String>,
}

/// Fake build service. Created builds get ids `build-1`, `build-2`, ...
#[derive(Clone, Default)]
pub struct FakeBuildService {
    inner: Arc<Mutex<FakeBuildState>>,
}

impl FakeBuildService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `get_build` report `build`.
    pub fn set_build(&self, build: RemoteBuild) {
        self.inner.lock().builds.insert(build.id.clone(), build);
    }

    /// Make every following `create_build` fail with `message`.
    pub fn fail_create(&self, message: impl Into<String>) {
        self.inner.lock().fail_create = Some(message.into());
    }

    pub fn created(&self) -> Vec<CreatedBuild> {
        self.inner.lock().created.clone()
    }
}

#[async_trait]
impl BuildService for FakeBuildService {
    async fn create_build(
        &self,
        project: &str,
        request: &BuildRequest,
    ) -> Result<String, AdapterError> {
        let mut inner = self.inner.lock();
        if let Some(message) = &inner.fail_create {
            return Err(AdapterError::Status {
                operation: "builds.create",
                status: 400,
                body: message.clone(),
            });
        }
        let build_id = format!("build-{}", inner.created.len() + 1);
        inner.created.push(CreatedBuild {
            project: project.to_string(),
            build_id: build_id.clone(),
            request: request.clone(),
        });
        Ok(build_id)
    }

    async fn get_build(&self, _project: &str, build_id: &str) -> Result<RemoteBuild, AdapterError> {
        self.inner.lock().builds.get(build_id).cloned().ok_or_else(|| AdapterError::Status {
            operation: "builds.get",
            status: 404,
            body: format!("build {} not found", build_id),
        })
    }
}

/// Fake object store holding objects in memory, keyed by (bucket, name).
#[derive(Clone, Default)]
pub struct FakeObjectStore {
    inner: Arc<Mutex<BTreeMap<(String, String), Upload>>>,
}

impl FakeObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, bucket: &str, name: &str, data: impl Into<Vec<u8>>) {
        let upload = Upload {
            data: data.into(),
            content_type: "application/octet-stream".to_string(),
            cache_control: None,
        };
        self.inner.lock().insert((bucket.to_string(), name.to_string()), upload);
    }

    pub fn get(&self, bucket: &str, name: &str) -> Option<Upload> {
        self.inner.lock().get(&(bucket.to_string(), name.to_string())).cloned()
    }

    /// Object names in `bucket`, sorted.
    pub fn objects(&self, bucket: &str) -> Vec<String> {
        self.inner
            .lock()
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, name)| name.clone())
            .collect()
    }
}

#[async_trait]
impl ObjectStore for FakeObjectStore {
    async fn exists(&self, bucket: &str, name: &str) -> Result<bool, AdapterError> {
        Ok(self.get(bucket, name).is_some())
    }

    async fn upload(&self, bucket: &str, name: &str, upload: Upload) -> Result<(), AdapterError> {
        self.inner.lock().insert((bucket.to_string(), name.to_string()), upload);
        Ok(())
    }

    async fn copy(
        &self,
        src_bucket: &str,
        src_name: &str,
        dst_bucket: &str,
        dst_name: &str,
    ) -> Result<(), AdapterError> {
        let mut inner = self.inner.lock();
        let source = (src_bucket.to_string(), src_name.to_string());
        let Some(object) = inner.get(&source).cloned() else {
            return Err(AdapterError::Status {
                operation: "objects.copy",
                status: 404,
                body: format!("gs://{}/{} not found", src_bucket, src_name),
            });
        };
        inner.insert((dst_bucket.to_string(), dst_name.to_string()), object);
        Ok(())
    }
}

/// Signer producing readable, deterministic urls.
#[derive(Clone, Copy, Default)]
pub struct FakeSigner;

impl UrlSigner for FakeSigner {
    fn sign_url(&self, path: &str, method: &str, expires: i64) -> Result<String, AdapterError> {
        Ok(format!("https://signed.example{}?method={}&expires={}", path, method, expires))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
