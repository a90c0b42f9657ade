// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fb update-status`

use super::{build_service, google_api};
use fb_adapters::{BuildService, DatastoreStore, GcsClient, ObjectStore};
use fb_core::BuildTag;
use fb_engine::{env, EngineError, StatusReport, StatusUpdater};
use fb_storage::{EntityStore, FileStore};

/// Publish status for `tag`, or for both tags plus badges when `None`.
pub async fn update_status(tag: Option<BuildTag>) -> Result<(), EngineError> {
    let settings = env::settings()?;
    let api = google_api()?;
    let builds = build_service(&api);
    let objects = GcsClient::new(api.clone());

    let report = match env::state_file() {
        Some(path) => {
            let store = FileStore::open(path)?;
            run(StatusUpdater::new(builds, objects, store, settings), tag).await?
        }
        None => {
            let store = DatastoreStore::new(api, settings.image_project.clone());
            run(StatusUpdater::new(builds, objects, store, settings), tag).await?
        }
    };
    print_report(&report);
    Ok(())
}

async fn run<B, O, S>(
    updater: StatusUpdater<B, O, S>,
    tag: Option<BuildTag>,
) -> Result<StatusReport, EngineError>
where
    B: BuildService,
    O: ObjectStore,
    S: EntityStore,
{
    match tag {
        Some(tag) => updater.update_tag_status(tag).await,
        None => updater.update_status().await,
    }
}

fn print_report(report: &StatusReport) {
    for (project, badge) in &report.badges {
        println!("[badge] {}: {}", project, badge);
    }
    tracing::info!(
        fuzzing = report.fuzzing.len(),
        coverage = report.coverage.len(),
        badges = report.badges.len(),
        "status updated"
    );
}
