// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod build;
pub mod status;

use fb_adapters::{CloudBuildClient, GoogleApi};
use fb_engine::{env, EngineError};

/// Authenticated API client shared by the cloud adapters.
pub(crate) fn google_api() -> Result<GoogleApi, EngineError> {
    Ok(GoogleApi::new(env::token_source()?)?)
}

pub(crate) fn build_service(api: &GoogleApi) -> CloudBuildClient {
    CloudBuildClient::new(api.clone())
}
