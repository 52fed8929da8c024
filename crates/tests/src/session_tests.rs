use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use server::directory::AccountDirectory;
use shared_types::AccountSeed;
use std::sync::Arc;

use crate::common::{self, ALICE_EMAIL, ALICE_PASSWORD, BOB_EMAIL, BOB_PASSWORD};

#[tokio::test]
async fn test_session_is_null_when_signed_out() {
    let app = common::test_app();

    let response = common::get(&app, "/api/v1/session", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, Value::Null);
    assert!(response.set_cookie().is_none());
}

#[tokio::test]
async fn test_session_round_trip() {
    let app = common::test_app();
    let cookie = common::sign_in(&app, BOB_EMAIL, BOB_PASSWORD).await;

    let response = common::get(&app, "/api/v1/session", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "id": "u1", "email": "bob@x.com" }));
}

#[tokio::test]
async fn test_roles_in_stored_order() {
    let app = common::test_app();
    let cookie = common::sign_in(&app, BOB_EMAIL, BOB_PASSWORD).await;

    let response = common::get(&app, "/api/v1/roles", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!(["grower", "qa"]));
}

#[tokio::test]
async fn test_roles_pass_unknown_codes_through() {
    let app = common::test_app();
    let cookie = common::sign_in(&app, ALICE_EMAIL, ALICE_PASSWORD).await;

    let response = common::get(&app, "/api/v1/roles", Some(&cookie)).await;

    assert_eq!(response.body, json!(["manager", "night_shift"]));
}

#[tokio::test]
async fn test_profile_present_and_absent() {
    let app = common::test_app();

    let alice = common::sign_in(&app, ALICE_EMAIL, ALICE_PASSWORD).await;
    let response = common::get(&app, "/api/v1/profile", Some(&alice)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "user_id": "u2", "display_name": "Alice" }));

    let bob = common::sign_in(&app, BOB_EMAIL, BOB_PASSWORD).await;
    let response = common::get(&app, "/api/v1/profile", Some(&bob)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, Value::Null);
}

#[tokio::test]
async fn test_roles_and_profile_require_session() {
    let app = common::test_app();

    for uri in ["/api/v1/roles", "/api/v1/profile"] {
        let response = common::get(&app, uri, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(response.body["kind"], "Unauthorized", "{uri}");
    }
}

#[tokio::test]
async fn test_bearer_token_is_accepted() {
    let app = common::test_app();
    let cookie = common::sign_in(&app, BOB_EMAIL, BOB_PASSWORD).await;
    let token = cookie
        .strip_prefix("vitacore_session=")
        .expect("session cookie pair");

    let response = common::get_with_bearer(&app, "/api/v1/roles", token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!(["grower", "qa"]));
}

#[tokio::test]
async fn test_garbage_token_is_cleared() {
    let app = common::test_app();

    let response = common::get(&app, "/api/v1/session", Some("vitacore_session=not-a-jwt")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, Value::Null);
    let cleared = response.set_cookie().expect("stale cookie cleared");
    assert!(cleared.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_removed_account_reads_as_signed_out() {
    let cookie = common::sign_in(&common::test_app(), BOB_EMAIL, BOB_PASSWORD).await;

    // Same signing secret, but the account is gone.
    let app = common::test_app_with(Arc::new(AccountDirectory::from_seeds(Vec::<AccountSeed>::new())));

    let response = common::get(&app, "/api/v1/session", Some(&cookie)).await;
    assert_eq!(response.body, Value::Null);
    assert!(response
        .set_cookie()
        .is_some_and(|c| c.contains("Max-Age=0")));

    let response = common::get(&app, "/api/v1/roles", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
