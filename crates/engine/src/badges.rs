// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Publishing per-project badges.

use crate::error::EngineError;
use crate::status::StatusUpdater;
use fb_adapters::{BuildService, ObjectStore};
use fb_core::badge::destination_path;
use fb_core::{Badge, BADGE_IMAGE_TYPES};
use fb_storage::EntityStore;

impl<B, O, S> StatusUpdater<B, O, S>
where
    B: BuildService,
    O: ObjectStore,
    S: EntityStore,
{
    /// Copy the badge matching the latest outcomes over `badges/<project>.*`.
    pub async fn update_build_badges(
        &self,
        project: &str,
        fuzzing_ok: bool,
        coverage_ok: bool,
    ) -> Result<Badge, EngineError> {
        let badge = Badge::select(fuzzing_ok, coverage_ok);
        tracing::info!(project, badge = %badge, "updating badge");

        let bucket = &self.settings.status_bucket;
        for extension in BADGE_IMAGE_TYPES {
            let source = badge.source_path(extension);
            let destination = destination_path(project, extension);
            self.objects
                .copy(bucket, &source, bucket, &destination)
                .await?;
        }
        Ok(badge)
    }
}

#[cfg(test)]
#[path = "badges_tests.rs"]
mod tests;
