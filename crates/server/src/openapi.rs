use axum::Router;
use shared_types::{AppError, AppErrorKind, AuthSettings, Profile, RoleCode, Session, SignInRequest};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::directory::AccountDirectory;
use crate::health;
use crate::rest;
use crate::state::AppState;

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::sign_in,
        rest::sign_out,
        rest::get_session,
        rest::get_roles,
        rest::get_profile,
        health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        Session,
        Profile,
        SignInRequest,
        RoleCode,
        health::HealthResponse,
    )),
    tags(
        (name = "auth", description = "Sign-in and sign-out"),
        (name = "session", description = "Current session, roles and profile"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "VitaCore CMS API",
        description = "Session, role and profile backend for the VitaCore cultivation dashboard",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router serving the REST API, `/health`, and (when
/// `api_docs` is enabled) the API reference at `/docs`.
pub fn api_router(directory: Arc<AccountDirectory>, auth: AuthSettings) -> Router {
    let state = AppState::new(directory, auth);
    let flags = crate::config::feature_flags();

    let router = Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state);

    if flags.api_docs {
        router.merge(Scalar::with_url("/docs", ApiDoc::openapi()))
    } else {
        router
    }
}
