// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::pkcs8::DecodePrivateKey;
use rsa::sha2::Sha256;
use rsa::signature::Verifier;
use rsa::RsaPrivateKey;

const TEST_KEY: &str = include_str!("../tests/fixtures/test_key.pem");
const ISSUED_AT: i64 = 1_600_000_000;

fn test_account() -> ServiceAccountKey {
    ServiceAccountKey::new("builder@example.iam.gserviceaccount.com", TEST_KEY)
}

fn assertion(request: &TokenRequest) -> &str {
    request
        .body
        .strip_prefix(
            "grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer&assertion=",
        )
        .unwrap()
}

#[test]
fn token_request_posts_to_key_token_uri() {
    let request = TokenRequest::new(&test_account(), ISSUED_AT).unwrap();
    assert_eq!(request.url, "https://oauth2.googleapis.com/token");
    assert_eq!(assertion(&request).split('.').count(), 3);
}

#[test]
fn assertion_carries_cloud_platform_claims() {
    let request = TokenRequest::new(&test_account(), ISSUED_AT).unwrap();
    let parts: Vec<&str> = assertion(&request).split('.').collect();

    let header: serde_json::Value =
        serde_json::from_slice(&BASE64_URL.decode(parts[0]).unwrap()).unwrap();
    assert_eq!(header, serde_json::json!({"alg": "RS256", "typ": "JWT"}));

    let claims: JwtClaims = serde_json::from_slice(&BASE64_URL.decode(parts[1]).unwrap()).unwrap();
    assert_eq!(
        claims,
        JwtClaims {
            iss: "builder@example.iam.gserviceaccount.com".to_string(),
            scope: "https://www.googleapis.com/auth/cloud-platform".to_string(),
            aud: "https://oauth2.googleapis.com/token".to_string(),
            iat: ISSUED_AT,
            exp: ISSUED_AT + 3600,
        }
    );
}

#[test]
fn assertion_signature_verifies_with_public_key() {
    let request = TokenRequest::new(&test_account(), ISSUED_AT).unwrap();
    let jwt = assertion(&request);
    let (signing_input, signature) = jwt.rsplit_once('.').unwrap();

    let key = RsaPrivateKey::from_pkcs8_pem(TEST_KEY).unwrap();
    let verifying_key = VerifyingKey::<Sha256>::new(key.to_public_key());
    let raw = BASE64_URL.decode(signature).unwrap();
    let signature = Signature::try_from(raw.as_slice()).unwrap();
    verifying_key.verify(signing_input.as_bytes(), &signature).unwrap();
}

#[test]
fn custom_token_uri_is_audience_and_endpoint() {
    let mut key = test_account();
    key.token_uri = "https://oauth2.example.test/token".to_string();

    let request = TokenRequest::new(&key, ISSUED_AT).unwrap();
    assert_eq!(request.url, "https://oauth2.example.test/token");
    assert_eq!(JwtClaims::new(&key, ISSUED_AT).aud, "https://oauth2.example.test/token");
}

#[test]
fn invalid_private_key_fails_before_any_request() {
    let key = ServiceAccountKey::new("builder@example.iam.gserviceaccount.com", "nope");
    assert!(matches!(TokenRequest::new(&key, ISSUED_AT), Err(AdapterError::Credentials(_))));
}
