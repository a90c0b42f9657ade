// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors from calls into cloud services.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("{operation}: request failed: {source}")]
    Http {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{operation}: HTTP {status}: {body}")]
    Status { operation: &'static str, status: u16, body: String },
    #[error("{operation}: unexpected response: {message}")]
    Decode { operation: &'static str, message: String },
    #[error("credentials: {0}")]
    Credentials(String),
    #[error("signing failed: {0}")]
    Signing(String),
    #[error("invalid url: {0}")]
    Url(String),
}

impl AdapterError {
    pub(crate) fn http(operation: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| AdapterError::Http { operation, source }
    }

    pub(crate) fn decode(operation: &'static str, message: impl Into<String>) -> Self {
        AdapterError::Decode { operation, message: message.into() }
    }
}
