// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cloud Storage client.
//!
//! Metadata and copies go through the JSON API, where an object name is a
//! single percent-encoded path segment. Uploads go through the XML API so
//! `Cache-Control` can be set in the same request.

use crate::error::AdapterError;
use crate::http::{is_not_found, GoogleApi};
use async_trait::async_trait;
use reqwest::Url;

const JSON_API: &str = "https://storage.googleapis.com/storage/v1";
const XML_API: &str = "https://storage.googleapis.com";

/// An object body with the metadata it is published with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub data: Vec<u8>,
    pub content_type: String,
    pub cache_control: Option<String>,
}

impl Upload {
    pub fn json(data: Vec<u8>) -> Self {
        Self { data, content_type: "application/json".to_string(), cache_control: None }
    }

    pub fn with_cache_control(mut self, cache_control: impl Into<String>) -> Self {
        self.cache_control = Some(cache_control.into());
        self
    }
}

/// Blob storage keyed by bucket and object name.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn exists(&self, bucket: &str, name: &str) -> Result<bool, AdapterError>;

    /// Create or replace an object.
    async fn upload(&self, bucket: &str, name: &str, upload: Upload) -> Result<(), AdapterError>;

    /// Copy an object, replacing any existing destination.
    async fn copy(
        &self,
        src_bucket: &str,
        src_name: &str,
        dst_bucket: &str,
        dst_name: &str,
    ) -> Result<(), AdapterError>;
}

#[derive(Clone)]
pub struct GcsClient {
    api: GoogleApi,
}

impl GcsClient {
    pub fn new(api: GoogleApi) -> Self {
        Self { api }
    }
}

/// `base` extended with `segments`, each percent-encoded as one segment.
pub(crate) fn api_url<'a>(
    base: &str,
    segments: impl IntoIterator<Item = &'a str>,
) -> Result<Url, AdapterError> {
    let mut url = Url::parse(base).map_err(|e| AdapterError::Url(format!("{}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| AdapterError::Url(format!("{} cannot be a base", base)))?
        .extend(segments);
    Ok(url)
}

/// JSON API url for an object, e.g. `.../b/<bucket>/o/<name>`.
pub(crate) fn object_url(bucket: &str, name: &str) -> Result<Url, AdapterError> {
    api_url(JSON_API, ["b", bucket, "o", name])
}

/// XML API url for an object; slashes in the name stay path separators.
pub(crate) fn xml_object_url(bucket: &str, name: &str) -> Result<Url, AdapterError> {
    api_url(XML_API, std::iter::once(bucket).chain(name.split('/')))
}

#[async_trait]
impl ObjectStore for GcsClient {
    async fn exists(&self, bucket: &str, name: &str) -> Result<bool, AdapterError> {
        let url = object_url(bucket, name)?;
        let response = self.api.send_raw("objects.get", self.api.http().get(url)).await?;
        if is_not_found(&response) {
            return Ok(false);
        }
        crate::http::check(response, "objects.get").await?;
        Ok(true)
    }

    async fn upload(&self, bucket: &str, name: &str, upload: Upload) -> Result<(), AdapterError> {
        let url = xml_object_url(bucket, name)?;
        let size = upload.data.len();
        let mut request = self
            .api
            .http()
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, upload.content_type)
            .body(upload.data);
        if let Some(cache_control) = upload.cache_control {
            request = request.header(reqwest::header::CACHE_CONTROL, cache_control);
        }
        self.api.send("objects.upload", request).await?;
        tracing::info!(bucket, name, size, "uploaded object");
        Ok(())
    }

    async fn copy(
        &self,
        src_bucket: &str,
        src_name: &str,
        dst_bucket: &str,
        dst_name: &str,
    ) -> Result<(), AdapterError> {
        let url = api_url(
            JSON_API,
            ["b", src_bucket, "o", src_name, "copyTo", "b", dst_bucket, "o", dst_name],
        )?;
        self.api
            .send("objects.copy", self.api.http().post(url).json(&serde_json::json!({})))
            .await?;
        tracing::debug!(src_bucket, src_name, dst_bucket, dst_name, "copied object");
        Ok(())
    }
}

#[cfg(test)]
#[path = "gcs_tests.rs"]
mod tests;
