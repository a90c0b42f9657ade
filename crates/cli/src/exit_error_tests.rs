// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use fb_adapters::AdapterError;
use std::path::PathBuf;

#[test]
fn missing_log_has_its_own_code() {
    let err = ExitError::from(EngineError::MissingBuildLog { log_name: "log-b1".to_string() });
    assert_eq!(err.code, EXIT_MISSING_LOG);
    assert_eq!(err.to_string(), "Missing build log file log-b1");
}

#[test]
fn configuration_errors_are_usage_errors() {
    let err = ExitError::from(EngineError::Project(missing_project_yaml()));
    assert_eq!(err.code, EXIT_USAGE);

    let err = ExitError::from(EngineError::Config {
        name: "GCB_OPTIONS",
        message: "bad".to_string(),
    });
    assert_eq!(err.code, EXIT_USAGE);
    assert_eq!(err.message, "invalid GCB_OPTIONS: bad");
}

#[test]
fn remote_errors_are_failures() {
    let err = ExitError::from(EngineError::Adapter(AdapterError::Status {
        operation: "builds.create",
        status: 403,
        body: "denied".to_string(),
    }));
    assert_eq!(err.code, EXIT_FAILURE);
    assert!(err.message.contains("HTTP 403"));
}

fn missing_project_yaml() -> fb_project::ProjectError {
    fb_project::ProjectError::Missing(PathBuf::from("projects/zlib/project.yaml"))
}
