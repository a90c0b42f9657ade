// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Access tokens for a service account key via the JWT bearer grant.

use crate::error::AdapterError;
use crate::signer::{ServiceAccountKey, ServiceAccountSigner};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64_URL, Engine};
use serde::{Deserialize, Serialize};

pub const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// `urn:ietf:params:oauth:grant-type:jwt-bearer`, form encoded.
const JWT_BEARER_GRANT: &str = "urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer";

/// Google rejects assertions valid for longer than an hour.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl JwtClaims {
    pub fn new(key: &ServiceAccountKey, issued_at: i64) -> Self {
        Self {
            iss: key.client_email.clone(),
            scope: CLOUD_PLATFORM_SCOPE.to_string(),
            aud: key.token_uri.clone(),
            iat: issued_at,
            exp: issued_at + ASSERTION_LIFETIME_SECS,
        }
    }
}

/// A form-encoded POST exchanging a signed assertion for an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequest {
    pub url: String,
    pub body: String,
}

impl TokenRequest {
    pub fn new(key: &ServiceAccountKey, issued_at: i64) -> Result<Self, AdapterError> {
        let signer = ServiceAccountSigner::new(key)?;
        let assertion = jwt_assertion(&signer, &JwtClaims::new(key, issued_at))?;
        Ok(Self {
            url: key.token_uri.clone(),
            body: format!("grant_type={}&assertion={}", JWT_BEARER_GRANT, assertion),
        })
    }
}

/// `<header>.<claims>.<signature>`, each part base64url without padding.
pub fn jwt_assertion(
    signer: &ServiceAccountSigner,
    claims: &JwtClaims,
) -> Result<String, AdapterError> {
    let header = BASE64_URL.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let claims = serde_json::to_vec(claims)
        .map_err(|e| AdapterError::Signing(format!("jwt claims: {}", e)))?;
    let signing_input = format!("{}.{}", header, BASE64_URL.encode(claims));
    let signature = signer.sign(signing_input.as_bytes())?;
    Ok(format!("{}.{}", signing_input, BASE64_URL.encode(signature)))
}

#[cfg(test)]
#[path = "oauth_tests.rs"]
mod tests;
