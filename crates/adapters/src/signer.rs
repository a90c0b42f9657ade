// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pre-signed Cloud Storage URLs.
//!
//! Build workers have no credentials of their own; they upload artifacts
//! through V2 signed URLs minted here from the service account key:
//!
//! ```text
//! string to sign:  <METHOD>\n<Content-MD5>\n<Content-Type>\n<Expires>\n<path>
//! signature:       base64(RSASSA-PKCS1-v1_5(SHA-256, key, string to sign))
//! url:             https://storage.googleapis.com<path>?GoogleAccessId=..&Expires=..&Signature=..
//! ```

use crate::error::AdapterError;
use crate::oauth::GOOGLE_TOKEN_URI;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::Url;
use rsa::{
    pkcs1v15::SigningKey,
    pkcs8::DecodePrivateKey,
    sha2::Sha256,
    signature::{SignatureEncoding, Signer},
    RsaPrivateKey,
};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

pub const STORAGE_HOST: &str = "https://storage.googleapis.com";

/// Mints URLs that allow `method` on an object path until `expires` (epoch seconds).
pub trait UrlSigner: Send + Sync {
    fn sign_url(&self, path: &str, method: &str, expires: i64) -> Result<String, AdapterError>;
}

fn default_token_uri() -> String {
    GOOGLE_TOKEN_URI.to_string()
}

/// The fields of a service account JSON key file that signing needs.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl ServiceAccountKey {
    pub fn new(client_email: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            client_email: client_email.into(),
            private_key: private_key.into(),
            token_uri: default_token_uri(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, AdapterError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AdapterError::Credentials(format!("failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            AdapterError::Credentials(format!("invalid key file {}: {}", path.display(), e))
        })
    }
}

// The private key never reaches logs.
impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

pub struct ServiceAccountSigner {
    client_email: String,
    signing_key: SigningKey<Sha256>,
}

impl ServiceAccountSigner {
    pub fn new(key: &ServiceAccountKey) -> Result<Self, AdapterError> {
        let private_key = RsaPrivateKey::from_pkcs8_pem(&key.private_key)
            .map_err(|e| AdapterError::Credentials(format!("invalid private key: {}", e)))?;
        Ok(Self {
            client_email: key.client_email.clone(),
            signing_key: SigningKey::new(private_key),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, AdapterError> {
        Self::new(&ServiceAccountKey::from_file(path)?)
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    /// RSASSA-PKCS1-v1_5 over SHA-256.
    pub(crate) fn sign(&self, message: &[u8]) -> Result<Vec<u8>, AdapterError> {
        self.signing_key
            .try_sign(message)
            .map(|signature| signature.to_vec())
            .map_err(|e| AdapterError::Signing(e.to_string()))
    }
}

/// The V2 string to sign for a request without body headers.
pub fn string_to_sign(method: &str, expires: i64, path: &str) -> String {
    format!("{}\n\n\n{}\n{}", method, expires, path)
}

impl UrlSigner for ServiceAccountSigner {
    fn sign_url(&self, path: &str, method: &str, expires: i64) -> Result<String, AdapterError> {
        let signature = self.sign(string_to_sign(method, expires, path).as_bytes())?;

        let mut url = Url::parse(&format!("{}{}", STORAGE_HOST, path))
            .map_err(|e| AdapterError::Url(format!("{}: {}", path, e)))?;
        url.query_pairs_mut()
            .append_pair("GoogleAccessId", &self.client_email)
            .append_pair("Expires", &expires.to_string())
            .append_pair("Signature", &BASE64.encode(signature));
        Ok(url.to_string())
    }
}

#[cfg(test)]
#[path = "signer_tests.rs"]
mod tests;
