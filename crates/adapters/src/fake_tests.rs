// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use fb_core::BuildStatus;
use std::time::Duration;

#[tokio::test]
async fn build_ids_are_sequential_and_requests_recorded() {
    let builds = FakeBuildService::new();
    let request = BuildRequest::new(Vec::new(), Duration::from_secs(60));
    assert_eq!(builds.create_build("oss-fuzz", &request).await.unwrap(), "build-1");
    assert_eq!(builds.create_build("oss-fuzz", &request).await.unwrap(), "build-2");

    let created = builds.created();
    assert_eq!(created.len(), 2);
    assert_eq!(created[1].build_id, "build-2");
    assert_eq!(created[0].request.timeout, "60s");
}

#[tokio::test]
async fn unknown_build_is_an_error() {
    let builds = FakeBuildService::new();
    builds.set_build(RemoteBuild {
        id: "b1".to_string(),
        status: BuildStatus::Success,
        finish_time: Some("2020-01-01T00:00:00Z".to_string()),
    });
    assert!(builds.get_build("oss-fuzz", "b1").await.unwrap().status.is_success());
    assert!(matches!(
        builds.get_build("oss-fuzz", "b2").await,
        Err(AdapterError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn copy_requires_source() {
    let store = FakeObjectStore::new();
    assert!(store.copy("a", "x", "b", "y").await.is_err());

    store.put("a", "x", "hello");
    store.copy("a", "x", "b", "y").await.unwrap();
    assert!(store.exists("b", "y").await.unwrap());
    assert_eq!(store.objects("b"), vec!["y".to_string()]);
    assert_eq!(store.get("b", "y").unwrap().data, b"hello");
}
