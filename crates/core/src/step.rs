// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build steps and the request that carries them to the build service.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One container invocation in a build.
///
/// Steps share `/workspace`, so later steps may consume files written by
/// earlier ones. The service runs them strictly in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStep {
    /// Container image to run
    pub name: String,
    pub args: Vec<String>,
    /// Working directory, relative to `/workspace`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    /// `KEY=value` pairs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<String>,
}

impl BuildStep {
    pub fn new<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
            dir: None,
            env: Vec::new(),
        }
    }

    /// Step running `bash -c <script>` in `image`.
    pub fn bash(image: impl Into<String>, script: impl Into<String>) -> Self {
        Self::new(image, ["bash".to_string(), "-c".to_string(), script.into()])
    }

    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn with_env(mut self, env: Vec<String>) -> Self {
        self.env = env;
        self
    }

    /// The script of a `bash -c` step.
    pub fn script(&self) -> Option<&str> {
        match self.args.as_slice() {
            [bash, flag, script] if bash == "bash" && flag == "-c" => Some(script),
            _ => None,
        }
    }
}

/// Body of a build creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    pub steps: Vec<BuildStep>,
    /// Duration string such as `"36000s"`
    pub timeout: String,
    /// Passed through to the service untouched
    #[serde(default = "empty_options")]
    pub options: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs_bucket: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

fn empty_options() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl BuildRequest {
    pub fn new(steps: Vec<BuildStep>, timeout: Duration) -> Self {
        Self {
            steps,
            timeout: format!("{}s", timeout.as_secs()),
            options: empty_options(),
            logs_bucket: None,
            images: Vec::new(),
        }
    }

    /// Options from `GCB_OPTIONS`; `None` keeps the empty object.
    pub fn with_options(mut self, options: Option<serde_json::Value>) -> Self {
        if let Some(options) = options {
            self.options = options;
        }
        self
    }

    pub fn with_logs_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.logs_bucket = Some(bucket.into());
        self
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }
}

#[cfg(test)]
#[path = "step_tests.rs"]
mod tests;
