use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use crate::auth::jwt;
use crate::directory::AccountDirectory;

static START_TIME: OnceLock<Instant> = OnceLock::new();

pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// `/health` body.
///
/// `status` is `"degraded"` when nobody can sign in: no accounts are
/// configured or `JWT_SECRET` is missing.
#[derive(Debug, Serialize, PartialEq, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Accounts loaded into the directory.
    pub accounts: usize,
    /// Whether session tokens can be signed.
    pub signing_key: bool,
    pub uptime_seconds: u64,
    pub version: String,
}

fn assess(accounts: usize, signing_key: bool, uptime_seconds: u64) -> HealthResponse {
    let status = if accounts > 0 && signing_key {
        "ok"
    } else {
        "degraded"
    };
    HealthResponse {
        status: status.to_string(),
        accounts,
        signing_key,
        uptime_seconds,
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service status", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(
    State(directory): State<Arc<AccountDirectory>>,
) -> Json<HealthResponse> {
    let uptime = START_TIME.get().map_or(0, |t| t.elapsed().as_secs());
    let signing_key = jwt::signing_configured();
    Json(assess(directory.len(), signing_key, uptime))
}
