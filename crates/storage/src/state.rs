// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process representation of every stored entity.

use fb_core::{entity_key, BuildRecord, BuildTag, LastSuccessfulBuild};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Entities keyed by `{project}-{build_tag}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreState {
    #[serde(default)]
    pub build_records: BTreeMap<String, BuildRecord>,
    #[serde(default)]
    pub last_successful_builds: BTreeMap<String, LastSuccessfulBuild>,
}

impl StoreState {
    pub fn build_records(&self, tag: BuildTag) -> Vec<BuildRecord> {
        let mut records: Vec<BuildRecord> =
            self.build_records.values().filter(|r| r.build_tag == tag).cloned().collect();
        // Keys embed the tag, so map order alone is not project order.
        records.sort_by(|a, b| a.project.cmp(&b.project));
        records
    }

    pub fn build_record(&self, project: &str, tag: BuildTag) -> Option<BuildRecord> {
        self.build_records.get(&entity_key(project, tag)).cloned()
    }

    pub fn put_build_record(&mut self, record: &BuildRecord) {
        self.build_records.insert(record.key(), record.clone());
    }

    pub fn last_successful_build(
        &self,
        project: &str,
        tag: BuildTag,
    ) -> Option<LastSuccessfulBuild> {
        self.last_successful_builds.get(&entity_key(project, tag)).cloned()
    }

    pub fn upsert_last_successful_build(&mut self, build: &LastSuccessfulBuild) {
        self.last_successful_builds.insert(build.key(), build.clone());
    }
}
