pub mod auth;
pub mod session;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub use auth::*;
pub use session::*;

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/auth/sign-in", post(auth::sign_in))
        .route("/api/v1/auth/sign-out", post(auth::sign_out))
        .route("/api/v1/session", get(session::get_session))
        .route("/api/v1/roles", get(session::get_roles))
        .route("/api/v1/profile", get(session::get_profile))
}
