// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Authenticated HTTP client shared by the Google API adapters.

use crate::error::AdapterError;
use crate::oauth::TokenRequest;
use crate::signer::ServiceAccountKey;
use fb_core::{Clock, SystemClock};
use parking_lot::Mutex;
use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;

const METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

/// Where bearer tokens come from.
#[derive(Debug, Clone)]
pub enum TokenSource {
    /// A token obtained out of band, e.g. `gcloud auth print-access-token`.
    Static(String),
    /// A service account key exchanged for a token at its `token_uri`.
    ServiceAccount(ServiceAccountKey),
    /// The metadata server of the VM or function the process runs on.
    Metadata,
}

#[derive(Deserialize)]
struct AccessToken {
    access_token: String,
}

#[derive(Clone)]
pub struct GoogleApi {
    http: reqwest::Client,
    tokens: TokenSource,
    cached: Arc<Mutex<Option<String>>>,
}

impl GoogleApi {
    pub fn new(tokens: TokenSource) -> Result<Self, AdapterError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("fuzzbuild/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AdapterError::http("client"))?;
        Ok(Self {
            http,
            tokens,
            cached: Arc::new(Mutex::new(None)),
        })
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Bearer token, fetched once per process.
    async fn bearer(&self) -> Result<String, AdapterError> {
        let cached = self.cached.lock().clone();
        if let Some(token) = cached {
            return Ok(token);
        }
        let token = match &self.tokens {
            TokenSource::Static(token) => token.clone(),
            TokenSource::ServiceAccount(key) => {
                let request = TokenRequest::new(key, SystemClock.epoch_secs())?;
                let response = self
                    .http
                    .post(&request.url)
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(request.body)
                    .send()
                    .await
                    .map_err(AdapterError::http("oauth token"))?;
                let token: AccessToken = check(response, "oauth token")
                    .await?
                    .json()
                    .await
                    .map_err(AdapterError::http("oauth token"))?;
                tracing::debug!(
                    client_email = %key.client_email,
                    "exchanged service account key for access token"
                );
                token.access_token
            }
            TokenSource::Metadata => {
                let response = self
                    .http
                    .get(METADATA_TOKEN_URL)
                    .header("Metadata-Flavor", "Google")
                    .send()
                    .await
                    .map_err(AdapterError::http("metadata token"))?;
                let token: AccessToken = check(response, "metadata token")
                    .await?
                    .json()
                    .await
                    .map_err(AdapterError::http("metadata token"))?;
                tracing::debug!("fetched access token from metadata server");
                token.access_token
            }
        };
        *self.cached.lock() = Some(token.clone());
        Ok(token)
    }

    /// Send with auth; the response status is not checked.
    pub(crate) async fn send_raw(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, AdapterError> {
        let token = self.bearer().await?;
        request
            .bearer_auth(token)
            .send()
            .await
            .map_err(AdapterError::http(operation))
    }

    /// Send with auth, failing on any non-2xx status.
    pub(crate) async fn send(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, AdapterError> {
        let response = self.send_raw(operation, request).await?;
        check(response, operation).await
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T, AdapterError> {
        self.send(operation, request)
            .await?
            .json()
            .await
            .map_err(AdapterError::http(operation))
    }
}

/// Turn a non-2xx response into [`AdapterError::Status`].
pub(crate) async fn check(
    response: Response,
    operation: &'static str,
) -> Result<Response, AdapterError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AdapterError::Status {
        operation,
        status: status.as_u16(),
        body,
    })
}

pub(crate) fn is_not_found(response: &Response) -> bool {
    response.status() == StatusCode::NOT_FOUND
}
