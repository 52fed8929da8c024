use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    middleware, Router,
};
use serde_json::Value;
use server::directory::AccountDirectory;
use shared_types::{AccountSeed, AuthSettings};
use std::sync::{Arc, LazyLock};
use tower::ServiceExt;

/// Shared by every test in this crate; `JWT_SECRET` is process-wide.
pub const TEST_JWT_SECRET: &str = "test-secret-key-for-jwt-unit-tests";

pub const BOB_EMAIL: &str = "bob@x.com";
pub const BOB_PASSWORD: &str = "hunter22";
pub const ALICE_EMAIL: &str = "alice@x.com";
pub const ALICE_PASSWORD: &str = "correct horse";

pub const SESSION_MINUTES: i64 = 60;

/// Hashing is slow, so the directory is built once.
static DIRECTORY: LazyLock<Arc<AccountDirectory>> = LazyLock::new(|| {
    let hash = |password: &str| {
        server::auth::password::hash_password(password).expect("hash test password")
    };
    Arc::new(AccountDirectory::from_seeds(vec![
        AccountSeed {
            id: "u1".into(),
            email: BOB_EMAIL.into(),
            display_name: None,
            password_hash: hash(BOB_PASSWORD),
            roles: vec!["grower".into(), "qa".into()],
        },
        AccountSeed {
            id: "u2".into(),
            email: ALICE_EMAIL.into(),
            display_name: Some("Alice".into()),
            password_hash: hash(ALICE_PASSWORD),
            roles: vec!["manager".into(), "night_shift".into()],
        },
    ]))
});

pub fn directory() -> Arc<AccountDirectory> {
    DIRECTORY.clone()
}

/// Build the REST router over the seeded directory, wrapped in the
/// permissive session middleware the app uses.
pub fn test_app() -> Router {
    test_app_with(directory())
}

/// Same as [`test_app`] over an arbitrary directory.
pub fn test_app_with(directory: Arc<AccountDirectory>) -> Router {
    std::env::set_var("JWT_SECRET", TEST_JWT_SECRET);
    let settings = AuthSettings {
        session_minutes: SESSION_MINUTES,
        ..AuthSettings::default()
    };
    server::openapi::api_router(directory, settings)
        .layer(middleware::from_fn(server::auth::middleware::auth_middleware))
}

/// Response pieces tests look at.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// The `Set-Cookie` header, if the response carried one.
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
    }

    /// `name=value` pair from `Set-Cookie`, ready for a `Cookie` header.
    pub fn session_cookie(&self) -> Option<String> {
        self.set_cookie()
            .and_then(|c| c.split(';').next())
            .map(str::to_string)
    }
}

/// POST JSON, optionally sending a `Cookie` header.
pub async fn post_json(app: &Router, uri: &str, body: &str, cookie: Option<&str>) -> TestResponse {
    let mut req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(cookie) = cookie {
        req = req.header(header::COOKIE, cookie);
    }
    send(app, req.body(Body::from(body.to_string())).unwrap()).await
}

/// GET, optionally sending a `Cookie` header.
pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> TestResponse {
    let mut req = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        req = req.header(header::COOKIE, cookie);
    }
    send(app, req.body(Body::empty()).unwrap()).await
}

/// GET with a Bearer token instead of a cookie.
pub async fn get_with_bearer(app: &Router, uri: &str, token: &str) -> TestResponse {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

/// Sign in and return the `Cookie` header value for the new session.
pub async fn sign_in(app: &Router, email: &str, password: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": password }).to_string();
    let response = post_json(app, "/api/v1/auth/sign-in", &body, None).await;
    assert_eq!(response.status, StatusCode::OK, "sign-in failed: {}", response.body);
    response
        .session_cookie()
        .expect("sign-in response sets the session cookie")
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> TestResponse {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
