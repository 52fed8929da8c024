use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{self, BOB_EMAIL, BOB_PASSWORD};

#[tokio::test]
async fn test_sign_out_clears_cookie() {
    let app = common::test_app();
    let cookie = common::sign_in(&app, BOB_EMAIL, BOB_PASSWORD).await;

    let response = common::post_json(&app, "/api/v1/auth/sign-out", "", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let cleared = response.set_cookie().expect("Set-Cookie header");
    assert!(cleared.starts_with("vitacore_session=;"));
    assert!(cleared.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_sign_out_without_session_succeeds() {
    let app = common::test_app();

    let response = common::post_json(&app, "/api/v1/auth/sign-out", "", None).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.set_cookie().is_some());
}

#[tokio::test]
async fn test_cleared_cookie_means_no_session() {
    let app = common::test_app();
    common::sign_in(&app, BOB_EMAIL, BOB_PASSWORD).await;

    let signed_out = common::post_json(&app, "/api/v1/auth/sign-out", "", None).await;
    let cleared = signed_out.session_cookie().expect("cleared cookie");

    let response = common::get(&app, "/api/v1/session", Some(&cleared)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, Value::Null);
}
