// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build status aggregation.
//!
//! For each tracked project the newest builds are fetched and classified,
//! their logs mirrored next to the status page, and the most recent success
//! persisted. The combined snapshot is published per build tag.

use crate::error::EngineError;
use crate::settings::Settings;
use fb_adapters::{BuildService, ObjectStore, Upload};
use fb_core::{
    sort_projects, Badge, BuildRecord, BuildRef, BuildTag, HistoryEntry, LastSuccessfulBuild,
    ProjectStatus, StatusSnapshot, MAX_BUILD_LOGS,
};
use fb_storage::EntityStore;
use std::collections::BTreeMap;

/// Outcome of the newest finished build per project, for projects with history.
pub type BuildStatuses = BTreeMap<String, bool>;

/// Name of the log object the build service writes for `build_id`.
pub fn log_name(build_id: &str) -> String {
    format!("log-{}.txt", build_id)
}

/// What one `update_status` run published.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusReport {
    pub fuzzing: BuildStatuses,
    pub coverage: BuildStatuses,
    pub badges: Vec<(String, Badge)>,
}

/// Aggregates build results and publishes status.
pub struct StatusUpdater<B, O, S> {
    pub(crate) builds: B,
    pub(crate) objects: O,
    pub(crate) store: S,
    pub(crate) settings: Settings,
}

impl<B, O, S> StatusUpdater<B, O, S>
where
    B: BuildService,
    O: ObjectStore,
    S: EntityStore,
{
    pub fn new(builds: B, objects: O, store: S, settings: Settings) -> Self {
        Self { builds, objects, store, settings }
    }

    /// Ensure the log of `build_id` is in the status bucket, copying it from
    /// the build logs bucket when needed. Returns false if no log exists.
    pub async fn mirror_build_log(&self, build_id: &str) -> Result<bool, EngineError> {
        let name = log_name(build_id);
        let status_bucket = &self.settings.status_bucket;
        if self.objects.exists(status_bucket, &name).await? {
            return Ok(true);
        }
        if !self.objects.exists(&self.settings.logs_bucket, &name).await? {
            return Ok(false);
        }
        self.objects.copy(&self.settings.logs_bucket, &name, status_bucket, &name).await?;
        tracing::debug!(build_id, "mirrored build log");
        Ok(true)
    }

    /// Up to [`MAX_BUILD_LOGS`] finished builds of `record`, newest first,
    /// and the newest success among them.
    ///
    /// Unfinished builds are skipped. Every finished build must have a log.
    pub async fn build_history(&self, record: &BuildRecord) -> Result<ProjectStatus, EngineError> {
        let mut status = ProjectStatus {
            name: record.project.clone(),
            history: Vec::new(),
            last_successful_build: None,
        };

        for build_id in record.newest_first() {
            let build = self.builds.get_build(&self.settings.image_project, build_id).await?;
            if !build.status.is_terminal() {
                tracing::debug!(
                    project = %record.project,
                    build_id,
                    status = ?build.status,
                    "skipping unfinished build"
                );
                continue;
            }

            let success = build.status.is_success();
            let finish_time = build.finish_time.unwrap_or_default();
            if success && status.last_successful_build.is_none() {
                status.last_successful_build = Some(BuildRef {
                    build_id: build_id.to_string(),
                    finish_time: finish_time.clone(),
                });
            }

            if !self.mirror_build_log(build_id).await? {
                return Err(EngineError::MissingBuildLog {
                    log_name: format!("log-{}", build_id),
                });
            }

            status.history.push(HistoryEntry {
                build_id: build_id.to_string(),
                finish_time,
                success,
            });
            if status.history.len() == MAX_BUILD_LOGS {
                break;
            }
        }
        Ok(status)
    }

    /// Persist the success found in this window, or report the stored one
    /// when the window holds none.
    pub async fn reconcile_last_successful_build(
        &self,
        status: &mut ProjectStatus,
        tag: BuildTag,
    ) -> Result<(), EngineError> {
        match &status.last_successful_build {
            Some(candidate) => {
                let build = LastSuccessfulBuild {
                    project: status.name.clone(),
                    build_tag: tag,
                    build_id: candidate.build_id.clone(),
                    finish_time: candidate.finish_time.clone(),
                };
                self.store.upsert_last_successful_build(&build).await?;
            }
            None => {
                let stored = self.store.last_successful_build(&status.name, tag).await?;
                status.last_successful_build =
                    stored.map(|b| BuildRef { build_id: b.build_id, finish_time: b.finish_time });
            }
        }
        Ok(())
    }

    /// Aggregate every project with a `tag` record and publish the snapshot
    /// to the tag's status file.
    pub async fn update_build_status(&self, tag: BuildTag) -> Result<BuildStatuses, EngineError> {
        let mut projects = Vec::new();
        let mut statuses = BuildStatuses::new();
        for record in self.store.build_records(tag).await? {
            let mut status = self.build_history(&record).await?;
            if let Some(success) = status.latest_success() {
                statuses.insert(record.project.clone(), success);
            }
            self.reconcile_last_successful_build(&mut status, tag).await?;
            projects.push(status);
        }

        sort_projects(&mut projects);
        let count = projects.len();
        self.upload_status(&StatusSnapshot { projects }, tag.status_filename()).await?;
        tracing::info!(tag = %tag, projects = count, "published build status");
        Ok(statuses)
    }

    async fn upload_status(
        &self,
        snapshot: &StatusSnapshot,
        filename: &str,
    ) -> Result<(), EngineError> {
        let upload = Upload::json(serde_json::to_vec(snapshot)?).with_cache_control("no-cache");
        self.objects
            .upload(&self.settings.status_bucket, filename, upload)
            .await?;
        Ok(())
    }

    /// Publish fuzzing and coverage status, then the badges of projects
    /// present in both.
    pub async fn update_status(&self) -> Result<StatusReport, EngineError> {
        let fuzzing = self.update_build_status(BuildTag::Fuzzing).await?;
        let coverage = self.update_build_status(BuildTag::Coverage).await?;

        let mut badges = Vec::new();
        for (project, &fuzzing_ok) in &fuzzing {
            let Some(&coverage_ok) = coverage.get(project) else {
                continue;
            };
            let badge = self.update_build_badges(project, fuzzing_ok, coverage_ok).await?;
            badges.push((project.clone(), badge));
        }
        Ok(StatusReport {
            fuzzing,
            coverage,
            badges,
        })
    }

    /// Publish the status of `tag` alone. Badges need both tags and are
    /// left as they are.
    pub async fn update_tag_status(&self, tag: BuildTag) -> Result<StatusReport, EngineError> {
        let statuses = self.update_build_status(tag).await?;
        let mut report = StatusReport::default();
        match tag {
            BuildTag::Fuzzing => report.fuzzing = statuses,
            BuildTag::Coverage => report.coverage = statuses,
        }
        Ok(report)
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
