//! Token issue / verify / authorize flow.
//!
//! Covers the path a request takes after login: the token issued for an
//! admin passes verification and the admin check; anything else is turned
//! away with the right status.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use axum::response::IntoResponse;
use secrecy::SecretString;

use shipdesk_api::error::ApiError;
use shipdesk_api::middleware::ensure_admin;
use shipdesk_api::services::{TokenService, passwords, tokens::ROLE_ADMIN};

fn tokens() -> TokenService {
    TokenService::new(
        &SecretString::from("integration-test-signing-key-32ch!".to_owned()),
        3600,
    )
}

#[test]
fn admin_token_passes_verification_and_authorization() {
    let tokens = tokens();
    let token = tokens
        .issue("6f1c1a34-0000-4000-8000-000000000001", ROLE_ADMIN)
        .unwrap();

    let claims = tokens.verify(&token).unwrap();
    assert_eq!(claims.sub, "6f1c1a34-0000-4000-8000-000000000001");
    assert!(ensure_admin(&claims).is_ok());
}

#[test]
fn non_admin_token_verifies_but_is_forbidden() {
    let tokens = tokens();
    let token = tokens.issue("some-subject", "viewer").unwrap();

    let claims = tokens.verify(&token).unwrap();
    let err = ensure_admin(&claims).unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
}

#[test]
fn tampered_token_is_rejected() {
    let tokens = tokens();
    let token = tokens.issue("subject", ROLE_ADMIN).unwrap();

    // Corrupt the signature segment
    let mut tampered = token.clone();
    tampered.pop();
    tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

    assert!(tokens.verify(&tampered).is_err());
}

#[test]
fn unauthorized_response_status() {
    let err = ApiError::Unauthorized("Missing authorization header".to_owned());
    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn password_hash_and_verify_flow() {
    let hash = passwords::hash("hunter2hunter2").unwrap();

    assert!(passwords::verify("hunter2hunter2", &hash));
    assert!(!passwords::verify("hunter2hunter3", &hash));

    // Hashes are salted, so two enrollments never collide
    let other = passwords::hash("hunter2hunter2").unwrap();
    assert_ne!(hash, other);
}
