// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fb build-project --dry-run` prints the request it would submit.

use crate::prelude::*;

const DOCKERFILE: &str = "FROM gcr.io/oss-fuzz-base/base-builder
RUN git clone https://example.com/zlib
WORKDIR $SRC/zlib
";

fn dry_run(workspace: &Workspace, project_dir: &std::path::Path) -> serde_json::Value {
    workspace
        .fb()
        .args(&["build-project", "--dry-run", project_dir.to_str().unwrap()])
        .passes()
        .stdout_json()
}

#[test]
fn dry_run_prints_request() {
    let workspace = Workspace::new();
    let dir = workspace.project("zlib", "homepage: https://zlib.net\n", DOCKERFILE);

    let request = dry_run(&workspace, &dir);
    assert_eq!(request["timeout"], "36000s");
    assert_eq!(request["logsBucket"], "oss-fuzz-gcb-logs");
    assert_eq!(request["options"], serde_json::json!({}));
    assert_eq!(request["images"], serde_json::json!(["gcr.io/oss-fuzz/zlib"]));

    let steps = request["steps"].as_array().unwrap();
    // prologue + 6 default configurations with 8 steps each
    assert_eq!(steps.len(), 4 + 6 * 8);
    assert_eq!(steps[1]["dir"], "oss-fuzz/projects/zlib");
    let compile = steps[4]["args"][2].as_str().unwrap();
    assert_eq!(
        compile,
        "rm -r /out && cd /src && cd $$SRC/zlib && mkdir -p /workspace/out/address && compile"
    );
}

#[test]
fn uploads_are_signed_with_the_service_account() {
    let workspace = Workspace::new();
    let yaml = "sanitizers:\n  - memory\nfuzzing_engines:\n  - libfuzzer\nrun_tests: false\n";
    let dir = workspace.project("libpng", yaml, DOCKERFILE);

    let request = dry_run(&workspace, &dir);
    let steps = request["steps"].as_array().unwrap();
    let upload = steps
        .iter()
        .find(|s| s["name"] == "gcr.io/oss-fuzz-base/uploader")
        .and_then(|s| s["args"][1].as_str())
        .unwrap();
    let prefix = "https://storage.googleapis.com/clusterfuzz-builds/libpng/libpng-memory-";
    assert!(upload.starts_with(prefix), "{}", upload);
    let access_id = "GoogleAccessId=builder%40example.iam.gserviceaccount.com";
    assert!(upload.contains(access_id), "{}", upload);
    assert!(upload.contains("Signature="), "{}", upload);
    let patch = "python /usr/local/bin/patch_build.py /workspace/out/memory";
    assert!(steps.iter().any(|s| s["args"][2] == patch));
}

#[test]
fn gcb_options_pass_through() {
    let workspace = Workspace::new();
    let dir = workspace.project("zlib", "", DOCKERFILE);
    let request = workspace
        .fb()
        .env("GCB_OPTIONS", "machineType: N1_HIGHCPU_32\n")
        .args(&["build-project", "--dry-run", dir.to_str().unwrap()])
        .passes()
        .stdout_json();
    assert_eq!(request["options"], serde_json::json!({"machineType": "N1_HIGHCPU_32"}));
}

#[test]
fn invalid_gcb_options_fail() {
    let workspace = Workspace::new();
    let dir = workspace.project("zlib", "", DOCKERFILE);
    workspace
        .fb()
        .env("GCB_OPTIONS", "a: [")
        .args(&["build-project", "--dry-run", dir.to_str().unwrap()])
        .exits_with(1)
        .stderr_has("GCB_OPTIONS");
}

#[test]
fn missing_credentials_fail_before_generating_steps() {
    let workspace = Workspace::new();
    let dir = workspace.project("zlib", "", DOCKERFILE);
    cli()
        .args(&["build-project", "--dry-run", dir.to_str().unwrap()])
        .exits_with(1)
        .stderr_has("GOOGLE_APPLICATION_CREDENTIALS");
}

#[test]
fn missing_project_yaml_fails() {
    let workspace = Workspace::new();
    workspace.file("projects/empty/Dockerfile", DOCKERFILE);
    let dir = workspace.path().join("projects/empty");
    workspace
        .fb()
        .args(&["build-project", "--dry-run", dir.to_str().unwrap()])
        .exits_with(1)
        .stderr_has("project.yaml");
}

#[test]
fn unknown_sanitizer_fails() {
    let workspace = Workspace::new();
    let dir = workspace.project("zlib", "sanitizers:\n  - thread\n", DOCKERFILE);
    workspace
        .fb()
        .args(&["build-project", "--dry-run", dir.to_str().unwrap()])
        .exits_with(1)
        .stderr_has("thread");
}
