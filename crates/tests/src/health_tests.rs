use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn test_health_reports_account_count() {
    let app = common::test_app();

    let response = common::get(&app, "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["accounts"], 2);
    assert_eq!(response.body["signing_key"], true);
    assert!(response.body["uptime_seconds"].is_u64());
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded_without_accounts() {
    let app = common::test_app_with(std::sync::Arc::new(
        server::directory::AccountDirectory::default(),
    ));

    let response = common::get(&app, "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "degraded");
    assert_eq!(response.body["accounts"], 0);
}
