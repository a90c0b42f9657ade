// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Submitting project builds.

use crate::error::EngineError;
use crate::settings::Settings;
use crate::steps::{project_build_steps, BUILD_TIMEOUT};
use fb_adapters::{BuildService, UrlSigner};
use fb_core::{BuildRequest, BuildStep, BuildTag, Clock};
use fb_project::{load_project, Project};
use fb_storage::{record_build, EntityStore};
use std::path::Path;

const LOGS_VIEWER: &str = "https://console.developers.google.com/logs/viewer";

/// Console url showing the logs of `build_id`, which ran in `project`.
pub fn logs_url(project: &str, build_id: &str) -> String {
    format!(
        "{}?resource=build%2Fbuild_id%2F{}&project={}",
        LOGS_VIEWER, build_id, project
    )
}

/// The request that builds `image` with `steps`.
pub fn project_build_request(
    steps: Vec<BuildStep>,
    image: String,
    settings: &Settings,
) -> BuildRequest {
    BuildRequest::new(steps, BUILD_TIMEOUT)
        .with_options(settings.gcb_options.clone())
        .with_logs_bucket(settings.logs_bucket.clone())
        .with_images(vec![image])
}

/// Load the project in `dir` and assemble its build request.
///
/// Fails before any step is generated if the project cannot be loaded.
pub fn prepare_project_build<C: Clock>(
    dir: &Path,
    signer: &dyn UrlSigner,
    clock: &C,
    settings: &Settings,
) -> Result<(Project, BuildRequest), EngineError> {
    let project = load_project(dir)?;
    let (steps, image) = project_build_steps(&project, signer, clock)?;
    tracing::debug!(
        project = %project.descriptor.name,
        steps = steps.len(),
        %image,
        "generated build steps"
    );
    let request = project_build_request(steps, image, settings);
    Ok((project, request))
}

/// Submit `request` for `project` and append the new build id to the
/// project's fuzzing history.
pub async fn run_build<B, S>(
    builds: &B,
    store: &S,
    settings: &Settings,
    project: &str,
    request: &BuildRequest,
) -> Result<String, EngineError>
where
    B: BuildService + ?Sized,
    S: EntityStore + ?Sized,
{
    let build_id = builds
        .create_build(&settings.image_project, request)
        .await?;
    tracing::info!(
        project,
        %build_id,
        logs = %logs_url(&settings.image_project, &build_id),
        "submitted project build"
    );
    record_build(store, project, BuildTag::Fuzzing, &build_id).await?;
    Ok(build_id)
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod tests;
