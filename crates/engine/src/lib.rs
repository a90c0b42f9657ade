// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fb-engine: Build generation, submission and status publishing

mod badges;
mod base_images;
pub mod env;
mod error;
mod settings;
mod status;
mod steps;
mod submit;

pub use base_images::{base_image_steps, base_images_request, build_base_images, BASE_IMAGES};
pub use error::EngineError;
pub use settings::{parse_gcb_options, Settings};
pub use status::{log_name, BuildStatuses, StatusReport, StatusUpdater};
pub use steps::{artifact_timestamp, project_build_steps, upload_path, BUILD_TIMEOUT};
pub use submit::{logs_url, prepare_project_build, project_build_request, run_build};
