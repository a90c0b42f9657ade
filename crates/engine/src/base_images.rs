// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Building the shared base images.

use crate::error::EngineError;
use crate::settings::Settings;
use crate::steps::{clone_step, docker_build_step};
use fb_adapters::BuildService;
use fb_core::{BuildRequest, BuildStep};
use std::time::Duration;

/// In dependency order: each image builds on an earlier one.
pub const BASE_IMAGES: [&str; 5] =
    ["base-image", "base-clang", "base-builder", "base-runner", "base-runner-debug"];

pub const BASE_IMAGE_TAG_PREFIX: &str = "gcr.io/oss-fuzz-base/";

pub const BASE_IMAGES_TIMEOUT: Duration = Duration::from_secs(4 * 60 * 60);

pub fn base_image_tag(image: &str) -> String {
    format!("{}{}", BASE_IMAGE_TAG_PREFIX, image)
}

/// Clone, then one `docker build` per base image.
pub fn base_image_steps() -> Vec<BuildStep> {
    let mut steps = vec![clone_step()];
    for image in BASE_IMAGES {
        steps.push(docker_build_step(
            &base_image_tag(image),
            format!("oss-fuzz/infra/base-images/{}", image),
        ));
    }
    steps
}

pub fn base_images_request(settings: &Settings) -> BuildRequest {
    BuildRequest::new(base_image_steps(), BASE_IMAGES_TIMEOUT)
        .with_options(settings.gcb_options.clone())
        .with_images(BASE_IMAGES.iter().map(|image| base_image_tag(image)).collect())
}

/// Submit the base image build to the base image project.
pub async fn build_base_images<B: BuildService + ?Sized>(
    builds: &B,
    settings: &Settings,
) -> Result<String, EngineError> {
    let request = base_images_request(settings);
    let build_id = builds.create_build(&settings.base_image_project, &request).await?;
    tracing::info!(%build_id, images = BASE_IMAGES.len(), "submitted base image build");
    Ok(build_id)
}

#[cfg(test)]
#[path = "base_images_tests.rs"]
mod tests;
