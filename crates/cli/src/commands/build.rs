// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fb build-project` and `fb build-base-images`

use super::{build_service, google_api};
use fb_adapters::{DatastoreStore, ServiceAccountSigner};
use fb_core::SystemClock;
use fb_engine::{build_base_images, env, logs_url, prepare_project_build, run_build, EngineError};
use fb_storage::FileStore;
use std::path::Path;

fn print_build(project: &str, build_id: &str) {
    eprintln!("Logs: {}", logs_url(project, build_id));
    println!("{}", build_id);
}

pub async fn build_project(project_dir: &Path, dry_run: bool) -> Result<(), EngineError> {
    let settings = env::settings()?;
    let signer = ServiceAccountSigner::from_file(&env::credentials_path()?)?;
    let (project, request) = prepare_project_build(project_dir, &signer, &SystemClock, &settings)?;

    if dry_run {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let api = google_api()?;
    let builds = build_service(&api);
    let name = project.descriptor.name.as_str();
    let build_id = match env::state_file() {
        Some(path) => run_build(&builds, &FileStore::open(path)?, &settings, name, &request).await?,
        None => {
            let store = DatastoreStore::new(api, settings.image_project.clone());
            run_build(&builds, &store, &settings, name, &request).await?
        }
    };
    print_build(&settings.image_project, &build_id);
    Ok(())
}

pub async fn build_base_images_command() -> Result<(), EngineError> {
    let settings = env::settings()?;
    let api = google_api()?;
    let build_id = build_base_images(&build_service(&api), &settings).await?;
    print_build(&settings.base_image_project, &build_id);
    Ok(())
}
