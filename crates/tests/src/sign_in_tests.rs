use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{self, ALICE_EMAIL, ALICE_PASSWORD, BOB_EMAIL, BOB_PASSWORD};

fn credentials(email: &str, password: &str) -> String {
    json!({ "email": email, "password": password }).to_string()
}

#[tokio::test]
async fn test_sign_in_returns_session_and_sets_cookie() {
    let app = common::test_app();

    let response = common::post_json(
        &app,
        "/api/v1/auth/sign-in",
        &credentials(BOB_EMAIL, BOB_PASSWORD),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "id": "u1", "email": "bob@x.com" }));

    let cookie = response.set_cookie().expect("Set-Cookie header");
    assert!(cookie.starts_with("vitacore_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains(&format!("Max-Age={}", common::SESSION_MINUTES * 60)));
}

#[tokio::test]
async fn test_sign_in_email_is_case_insensitive() {
    let app = common::test_app();

    let response = common::post_json(
        &app,
        "/api/v1/auth/sign-in",
        &credentials("ALICE@X.COM", ALICE_PASSWORD),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], "u2");
    assert_eq!(response.body["email"], ALICE_EMAIL);
}

#[tokio::test]
async fn test_sign_in_wrong_password_is_unauthorized() {
    let app = common::test_app();

    let response = common::post_json(
        &app,
        "/api/v1/auth/sign-in",
        &credentials(BOB_EMAIL, "not-the-password"),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["kind"], "Unauthorized");
    assert_eq!(response.body["message"], "Invalid email or password");
    assert!(response.set_cookie().is_none());
}

#[tokio::test]
async fn test_sign_in_unknown_email_matches_wrong_password() {
    let app = common::test_app();

    let unknown = common::post_json(
        &app,
        "/api/v1/auth/sign-in",
        &credentials("carol@x.com", BOB_PASSWORD),
        None,
    )
    .await;
    let wrong = common::post_json(
        &app,
        "/api/v1/auth/sign-in",
        &credentials(BOB_EMAIL, "nope"),
        None,
    )
    .await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body, wrong.body);
}

#[tokio::test]
async fn test_sign_in_invalid_body_is_validation_error() {
    let app = common::test_app();

    let response = common::post_json(
        &app,
        "/api/v1/auth/sign-in",
        &credentials("not-an-email", ""),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["kind"], "ValidationError");
    assert!(response.body["field_errors"]["email"].is_string());
    assert!(response.body["field_errors"]["password"].is_string());
}
