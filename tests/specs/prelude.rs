// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers shared by the CLI specs.

use std::path::{Path, PathBuf};
use std::process::Output;

/// Environment the binary reads; cleared so the host cannot leak in.
const FB_ENV: &[&str] = &[
    "GCB_OPTIONS",
    "GOOGLE_APPLICATION_CREDENTIALS",
    "FB_ACCESS_TOKEN",
    "FB_STATE_FILE",
    "FB_IMAGE_PROJECT",
    "FB_STATUS_BUCKET",
    "FB_LOGS_BUCKET",
    "FB_LOG",
    "RUST_LOG",
];

const TEST_KEY: &str = include_str!("../../crates/adapters/tests/fixtures/test_key.pem");

pub struct Cli {
    cmd: assert_cmd::Command,
}

/// `fb` with a clean environment.
pub fn cli() -> Cli {
    let mut cmd = assert_cmd::Command::cargo_bin("fb").unwrap();
    for var in FB_ENV {
        cmd.env_remove(var);
    }
    Cli { cmd }
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    fn output(mut self) -> Output {
        self.cmd.output().unwrap()
    }

    pub fn passes(self) -> Run {
        let run = Run { output: self.output() };
        assert!(run.output.status.success(), "expected success\n{}", run.describe());
        run
    }

    pub fn exits_with(self, code: i32) -> Run {
        let run = Run { output: self.output() };
        let actual = run.output.status.code();
        assert_eq!(actual, Some(code), "unexpected exit code\n{}", run.describe());
        run
    }
}

pub struct Run {
    output: Output,
}

impl Run {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    fn describe(&self) -> String {
        format!("stdout:\n{}\nstderr:\n{}", self.stdout(), self.stderr())
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout().contains(needle), "stdout lacks {:?}\n{}", needle, self.describe());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr().contains(needle), "stderr lacks {:?}\n{}", needle, self.describe());
        self
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).unwrap()
    }
}

/// A scratch oss-fuzz style checkout with a service account key.
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let workspace = Self { dir: tempfile::tempdir().unwrap() };
        let key = serde_json::json!({
            "type": "service_account",
            "client_email": "builder@example.iam.gserviceaccount.com",
            "private_key": TEST_KEY,
        });
        workspace.file("key.json", &key.to_string());
        workspace
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn key_path(&self) -> PathBuf {
        self.path().join("key.json")
    }

    pub fn file(&self, rel: &str, content: &str) {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// `projects/<name>` with the given project.yaml and a Dockerfile.
    pub fn project(&self, name: &str, yaml: &str, dockerfile: &str) -> PathBuf {
        self.file(&format!("projects/{}/project.yaml", name), yaml);
        self.file(&format!("projects/{}/Dockerfile", name), dockerfile);
        self.path().join("projects").join(name)
    }

    /// `fb` configured with this workspace's key.
    pub fn fb(&self) -> Cli {
        cli().env("GOOGLE_APPLICATION_CREDENTIALS", self.key_path())
    }
}
