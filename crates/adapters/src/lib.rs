// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fb-adapters: Clients for Cloud Build, Cloud Storage and Datastore

mod cloudbuild;
mod datastore;
mod error;
mod gcs;
mod http;
mod oauth;
mod signer;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake;

pub use cloudbuild::{BuildService, CloudBuildClient};
pub use datastore::{DatastoreStore, BUILDS_HISTORY_KIND, LAST_SUCCESSFUL_BUILD_KIND};
pub use error::AdapterError;
pub use gcs::{GcsClient, ObjectStore, Upload};
pub use http::{GoogleApi, TokenSource};
pub use oauth::{
    jwt_assertion, JwtClaims, TokenRequest, CLOUD_PLATFORM_SCOPE, GOOGLE_TOKEN_URI,
};
pub use signer::{
    string_to_sign, ServiceAccountKey, ServiceAccountSigner, UrlSigner, STORAGE_HOST,
};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{CreatedBuild, FakeBuildService, FakeObjectStore, FakeSigner};
