// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cloud Datastore v1 entity store.
//!
//! Entity layout, keyed by name `{project}-{build_tag}`:
//!
//! ```text
//! BuildsHistory        project, build_tag, build_ids[]
//! LastSuccessfulBuild  project, build_id, finish_time
//! ```

use crate::error::AdapterError;
use crate::http::GoogleApi;
use async_trait::async_trait;
use fb_core::{entity_key, BuildRecord, BuildTag, LastSuccessfulBuild};
use fb_storage::{EntityStore, StorageError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

const DATASTORE_API: &str = "https://datastore.googleapis.com/v1";

pub const BUILDS_HISTORY_KIND: &str = "BuildsHistory";
pub const LAST_SUCCESSFUL_BUILD_KIND: &str = "LastSuccessfulBuild";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Key {
    path: Vec<PathElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct PathElement {
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Key {
    fn named(kind: &str, name: String) -> Self {
        Self { path: vec![PathElement { kind: kind.to_string(), name: Some(name) }] }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Value {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    string_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    array_value: Option<ArrayValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ArrayValue {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    values: Vec<Value>,
}

impl Value {
    fn string(s: &str) -> Self {
        Self { string_value: Some(s.to_string()), ..Default::default() }
    }

    fn strings(items: &[String]) -> Self {
        Self {
            array_value: Some(ArrayValue {
                values: items.iter().map(|s| Value::string(s)).collect(),
            }),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Entity {
    key: Key,
    #[serde(default)]
    properties: BTreeMap<String, Value>,
}

impl Entity {
    fn string(&self, property: &str) -> Result<String, StorageError> {
        self.properties
            .get(property)
            .and_then(|v| v.string_value.clone())
            .ok_or_else(|| malformed(format!("missing string property {}", property)))
    }

    fn strings(&self, property: &str) -> Result<Vec<String>, StorageError> {
        let Some(value) = self.properties.get(property) else {
            return Ok(Vec::new());
        };
        let Some(array) = &value.array_value else {
            return Err(malformed(format!("property {} is not an array", property)));
        };
        array
            .values
            .iter()
            .map(|v| {
                v.string_value
                    .clone()
                    .ok_or_else(|| malformed(format!("non-string entry in {}", property)))
            })
            .collect()
    }
}

fn malformed(message: String) -> StorageError {
    StorageError::Backend { operation: "decode entity", message }
}

fn backend(operation: &'static str) -> impl FnOnce(AdapterError) -> StorageError {
    move |e| StorageError::Backend { operation, message: e.to_string() }
}

pub(crate) fn build_record_entity(record: &BuildRecord) -> Entity {
    Entity {
        key: Key::named(BUILDS_HISTORY_KIND, record.key()),
        properties: BTreeMap::from([
            ("project".to_string(), Value::string(&record.project)),
            ("build_tag".to_string(), Value::string(record.build_tag.as_str())),
            ("build_ids".to_string(), Value::strings(&record.build_ids)),
        ]),
    }
}

pub(crate) fn build_record_from_entity(
    entity: &Entity,
    tag: BuildTag,
) -> Result<BuildRecord, StorageError> {
    Ok(BuildRecord {
        project: entity.string("project")?,
        build_tag: tag,
        build_ids: entity.strings("build_ids")?,
    })
}

pub(crate) fn last_successful_entity(build: &LastSuccessfulBuild) -> Entity {
    Entity {
        key: Key::named(LAST_SUCCESSFUL_BUILD_KIND, build.key()),
        properties: BTreeMap::from([
            ("project".to_string(), Value::string(&build.project)),
            ("build_id".to_string(), Value::string(&build.build_id)),
            ("finish_time".to_string(), Value::string(&build.finish_time)),
        ]),
    }
}

pub(crate) fn last_successful_from_entity(
    entity: &Entity,
    tag: BuildTag,
) -> Result<LastSuccessfulBuild, StorageError> {
    Ok(LastSuccessfulBuild {
        project: entity.string("project")?,
        build_tag: tag,
        build_id: entity.string("build_id")?,
        finish_time: entity.string("finish_time")?,
    })
}

#[derive(Deserialize)]
struct EntityResult {
    entity: Entity,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryBatch {
    #[serde(default)]
    entity_results: Vec<EntityResult>,
    more_results: String,
    #[serde(default)]
    end_cursor: Option<String>,
}

#[derive(Deserialize)]
struct RunQueryResponse {
    batch: QueryBatch,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    found: Vec<EntityResult>,
}

#[derive(Clone)]
pub struct DatastoreStore {
    api: GoogleApi,
    project: String,
}

impl DatastoreStore {
    /// Store in the Datastore of GCP project `project`.
    pub fn new(api: GoogleApi, project: impl Into<String>) -> Self {
        Self { api, project: project.into() }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/projects/{}:{}", DATASTORE_API, self.project, method)
    }

    async fn lookup(&self, key: Key) -> Result<Option<Entity>, StorageError> {
        let body = json!({ "keys": [key] });
        let response: LookupResponse = self
            .api
            .send_json(
                "datastore.lookup",
                self.api.http().post(self.method_url("lookup")).json(&body),
            )
            .await
            .map_err(backend("datastore.lookup"))?;
        Ok(response.found.into_iter().next().map(|r| r.entity))
    }

    async fn upsert(&self, entity: Entity) -> Result<(), StorageError> {
        let body = json!({
            "mode": "NON_TRANSACTIONAL",
            "mutations": [{ "upsert": entity }],
        });
        self.api
            .send("datastore.commit", self.api.http().post(self.method_url("commit")).json(&body))
            .await
            .map_err(backend("datastore.commit"))?;
        Ok(())
    }
}

/// `runQuery` body for one page of build records with `tag`, by project.
pub(crate) fn build_records_query(tag: BuildTag, start_cursor: Option<&str>) -> serde_json::Value {
    let mut query = json!({
        "kind": [{ "name": BUILDS_HISTORY_KIND }],
        "filter": {
            "propertyFilter": {
                "property": { "name": "build_tag" },
                "op": "EQUAL",
                "value": { "stringValue": tag.as_str() },
            }
        },
        "order": [{ "property": { "name": "project" }, "direction": "ASCENDING" }],
    });
    if let Some(cursor) = start_cursor {
        query["startCursor"] = json!(cursor);
    }
    json!({ "query": query })
}

#[async_trait]
impl EntityStore for DatastoreStore {
    async fn build_records(&self, tag: BuildTag) -> Result<Vec<BuildRecord>, StorageError> {
        let mut records = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let body = build_records_query(tag, cursor.as_deref());
            let response: RunQueryResponse = self
                .api
                .send_json(
                    "datastore.runQuery",
                    self.api.http().post(self.method_url("runQuery")).json(&body),
                )
                .await
                .map_err(backend("datastore.runQuery"))?;
            for result in &response.batch.entity_results {
                records.push(build_record_from_entity(&result.entity, tag)?);
            }
            match (response.batch.more_results.as_str(), response.batch.end_cursor) {
                ("NOT_FINISHED", Some(next)) => cursor = Some(next),
                _ => break,
            }
        }
        tracing::debug!(tag = %tag, count = records.len(), "queried build records");
        Ok(records)
    }

    async fn build_record(
        &self,
        project: &str,
        tag: BuildTag,
    ) -> Result<Option<BuildRecord>, StorageError> {
        let key = Key::named(BUILDS_HISTORY_KIND, entity_key(project, tag));
        self.lookup(key).await?.map(|e| build_record_from_entity(&e, tag)).transpose()
    }

    async fn put_build_record(&self, record: &BuildRecord) -> Result<(), StorageError> {
        self.upsert(build_record_entity(record)).await
    }

    async fn last_successful_build(
        &self,
        project: &str,
        tag: BuildTag,
    ) -> Result<Option<LastSuccessfulBuild>, StorageError> {
        let key = Key::named(LAST_SUCCESSFUL_BUILD_KIND, entity_key(project, tag));
        self.lookup(key).await?.map(|e| last_successful_from_entity(&e, tag)).transpose()
    }

    async fn upsert_last_successful_build(
        &self,
        build: &LastSuccessfulBuild,
    ) -> Result<(), StorageError> {
        self.upsert(last_successful_entity(build)).await
    }
}

#[cfg(test)]
#[path = "datastore_tests.rs"]
mod tests;
