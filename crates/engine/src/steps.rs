// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build steps for one project.
//!
//! A fixed prologue checks out the repository, builds the project image and
//! records its source map. Then every buildable (engine, sanitizer) pair gets
//! a block that compiles into `/workspace/out/<sanitizer>`, optionally tests,
//! packages, uploads through signed urls and cleans up.

use crate::error::EngineError;
use chrono::{DateTime, Utc};
use fb_adapters::UrlSigner;
use fb_core::{BuildStep, Clock, FuzzingEngine, Sanitizer};
use fb_project::Project;
use std::time::Duration;

/// Timeout of a project build; signed upload urls live this long too.
pub const BUILD_TIMEOUT: Duration = Duration::from_secs(10 * 60 * 60);

pub const OSS_FUZZ_REPO: &str = "https://github.com/google/oss-fuzz.git";
pub const GIT_IMAGE: &str = "gcr.io/cloud-builders/git";
pub const DOCKER_IMAGE: &str = "gcr.io/cloud-builders/docker";
pub const MSAN_BUILDER_IMAGE: &str = "gcr.io/oss-fuzz-base/msan-builder";
pub const BASE_RUNNER_IMAGE: &str = "gcr.io/oss-fuzz-base/base-runner";
pub const UPLOADER_IMAGE: &str = "gcr.io/oss-fuzz-base/uploader";

const TARGETS_LIST_BASENAME: &str = "targets.list";
const SRCMAP_PATH: &str = "/workspace/srcmap.json";
const MSAN_LIBS_ENV: &str = "MSAN_LIBS_PATH=/workspace/msan";

/// `git clone` of the oss-fuzz repository into `/workspace/oss-fuzz`.
pub fn clone_step() -> BuildStep {
    BuildStep::new(GIT_IMAGE, ["clone", OSS_FUZZ_REPO])
}

/// `docker build -t <tag> .` run in `dir`.
pub fn docker_build_step(tag: &str, dir: String) -> BuildStep {
    BuildStep::new(DOCKER_IMAGE, ["build", "-t", tag, "."]).with_dir(dir)
}

fn prologue(name: &str, image: &str) -> Vec<BuildStep> {
    vec![
        clone_step(),
        docker_build_step(image, format!("oss-fuzz/projects/{}", name)),
        BuildStep::bash(image, format!("srcmap > {0} && cat {0}", SRCMAP_PATH))
            .with_env(vec!["OSSFUZZ_REVISION=$REVISION_ID".to_string()]),
        BuildStep::bash(MSAN_BUILDER_IMAGE, "cp -r /msan /workspace"),
    ]
}

/// Object path `/<bucket>/<project>/<file>` of an uploaded artifact.
pub fn upload_path(bucket: &str, project: &str, file: &str) -> String {
    format!("/{}/{}/{}", bucket, project, file)
}

/// Minute-resolution stamp used in artifact names.
pub fn artifact_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y%m%d%H%M").to_string()
}

/// Names and urls for one (engine, sanitizer) block.
struct Artifacts {
    out: String,
    zip_file: String,
    targets_list_file: String,
    srcmap_url: String,
    zip_url: String,
    targets_list_url: String,
}

impl Artifacts {
    fn new(
        name: &str,
        engine: FuzzingEngine,
        sanitizer: Sanitizer,
        stamp: &str,
        signer: &dyn UrlSigner,
        expires: i64,
    ) -> Result<Self, EngineError> {
        let stamped = format!("{}-{}-{}", name, sanitizer, stamp);
        let zip_file = format!("{}.zip", stamped);
        let srcmap_file = format!("{}.srcmap.json", stamped);
        let targets_list_file = format!("{}.{}", TARGETS_LIST_BASENAME, sanitizer);
        let bucket = engine.upload_bucket();
        let sign = |file: &str| signer.sign_url(&upload_path(bucket, name, file), "PUT", expires);
        Ok(Self {
            out: format!("/workspace/out/{}", sanitizer),
            srcmap_url: sign(&srcmap_file)?,
            zip_url: sign(&zip_file)?,
            targets_list_url: sign(&targets_list_file)?,
            zip_file,
            targets_list_file,
        })
    }
}

/// Steps building `project` under every supported configuration, and the
/// image tag the build produces.
pub fn project_build_steps<C: Clock>(
    project: &Project,
    signer: &dyn UrlSigner,
    clock: &C,
) -> Result<(Vec<BuildStep>, String), EngineError> {
    let descriptor = &project.descriptor;
    let name = descriptor.name.as_str();
    let image = descriptor.image.as_str();
    let stamp = artifact_timestamp(clock.now());
    let expires = clock.epoch_secs() + BUILD_TIMEOUT.as_secs() as i64;

    let mut steps = prologue(name, image);
    for (engine, sanitizer) in descriptor.build_configurations() {
        let artifacts = Artifacts::new(name, engine, sanitizer, &stamp, signer, expires)?;
        let out = &artifacts.out;
        let env = vec![
            engine.env(),
            sanitizer.env(),
            format!("OUT={}", out),
            MSAN_LIBS_ENV.to_string(),
        ];

        // Build scripts must use $OUT; removing /out makes misuse fail loudly.
        // The service overrides the image WORKDIR, so cd back into it.
        steps.push(
            BuildStep::bash(
                image,
                format!(
                    "rm -r /out && cd /src && cd {} && mkdir -p {} && compile",
                    project.workdir, out
                ),
            )
            .with_env(env.clone()),
        );
        if descriptor.run_tests {
            steps.push(BuildStep::bash(BASE_RUNNER_IMAGE, "test_all").with_env(env.clone()));
        }
        if sanitizer == Sanitizer::Memory {
            steps.push(BuildStep::bash(
                MSAN_BUILDER_IMAGE,
                format!("python /usr/local/bin/patch_build.py {}", out),
            ));
        }
        steps.push(
            BuildStep::bash(
                BASE_RUNNER_IMAGE,
                format!("targets_list > /workspace/{}", artifacts.targets_list_file),
            )
            .with_env(env),
        );
        steps.push(BuildStep::bash(
            image,
            format!("cd {} && zip -r {} *", out, artifacts.zip_file),
        ));
        steps.push(BuildStep::new(UPLOADER_IMAGE, [SRCMAP_PATH.to_string(), artifacts.srcmap_url]));
        steps.push(BuildStep::new(
            UPLOADER_IMAGE,
            [format!("{}/{}", out, artifacts.zip_file), artifacts.zip_url],
        ));
        steps.push(BuildStep::new(
            UPLOADER_IMAGE,
            [
                format!("/workspace/{}", artifacts.targets_list_file),
                artifacts.targets_list_url,
            ],
        ));
        steps.push(BuildStep::bash(image, format!("rm -r {}", out)));
        tracing::debug!(project = name, %engine, %sanitizer, "added build configuration");
    }

    Ok((steps, image.to_string()))
}

#[cfg(test)]
#[path = "steps_tests.rs"]
mod tests;
