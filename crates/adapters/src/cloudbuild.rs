// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cloud Build v1 client.

use crate::error::AdapterError;
use crate::http::GoogleApi;
use async_trait::async_trait;
use fb_core::{BuildRequest, RemoteBuild};
use serde::Deserialize;

const CLOUDBUILD_API: &str = "https://cloudbuild.googleapis.com/v1";

/// Remote build service: accepts whole builds, reports their state.
#[async_trait]
pub trait BuildService: Send + Sync {
    /// Submit a build under `project`, returning its id.
    async fn create_build(
        &self,
        project: &str,
        request: &BuildRequest,
    ) -> Result<String, AdapterError>;

    async fn get_build(&self, project: &str, build_id: &str) -> Result<RemoteBuild, AdapterError>;
}

/// Long-running operation returned by `builds.create`.
#[derive(Deserialize)]
struct Operation {
    metadata: OperationMetadata,
}

#[derive(Deserialize)]
struct OperationMetadata {
    build: CreatedBuild,
}

#[derive(Deserialize)]
struct CreatedBuild {
    id: String,
}

#[derive(Clone)]
pub struct CloudBuildClient {
    api: GoogleApi,
}

impl CloudBuildClient {
    pub fn new(api: GoogleApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl BuildService for CloudBuildClient {
    async fn create_build(
        &self,
        project: &str,
        request: &BuildRequest,
    ) -> Result<String, AdapterError> {
        let url = format!("{}/projects/{}/builds", CLOUDBUILD_API, project);
        let operation: Operation = self
            .api
            .send_json("builds.create", self.api.http().post(url).json(request))
            .await?;
        let build_id = operation.metadata.build.id;
        if build_id.is_empty() {
            return Err(AdapterError::decode("builds.create", "operation carries no build id"));
        }
        tracing::info!(project, %build_id, steps = request.steps.len(), "build created");
        Ok(build_id)
    }

    async fn get_build(&self, project: &str, build_id: &str) -> Result<RemoteBuild, AdapterError> {
        let url = format!("{}/projects/{}/builds/{}", CLOUDBUILD_API, project, build_id);
        let build: RemoteBuild = self.api.send_json("builds.get", self.api.http().get(url)).await?;
        tracing::debug!(project, build_id, status = ?build.status, "fetched build");
        Ok(build)
    }
}

#[cfg(test)]
#[path = "cloudbuild_tests.rs"]
mod tests;
