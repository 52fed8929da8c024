use axum::{extract::State, Json};
use shared_types::{AppError, Profile, Session};
use std::sync::Arc;

use crate::auth::cookies::PendingCookieAction;
use crate::auth::extractors::{AuthRequired, Cookies, MaybeAuth};
use crate::auth::service;
use crate::directory::AccountDirectory;

#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses(
        (status = 200, description = "Current session, or null when signed out", body = Option<Session>)
    ),
    tag = "session"
)]
#[tracing::instrument(skip_all)]
pub async fn get_session(
    State(directory): State<Arc<AccountDirectory>>,
    auth: MaybeAuth,
    Cookies(slot): Cookies,
) -> Json<Option<Session>> {
    let Some(claims) = auth.0 else {
        return Json(None);
    };
    let session = service::current_session(&directory, &claims);
    if session.is_none() {
        slot.schedule(PendingCookieAction::Clear);
    }
    Json(session)
}

#[utoipa::path(
    get,
    path = "/api/v1/roles",
    responses(
        (status = 200, description = "Role codes in stored order", body = [String]),
        (status = 401, description = "Not signed in", body = AppError)
    ),
    tag = "session"
)]
#[tracing::instrument(skip_all)]
pub async fn get_roles(
    State(directory): State<Arc<AccountDirectory>>,
    auth: AuthRequired,
) -> Result<Json<Vec<String>>, AppError> {
    service::roles_for(&directory, &auth.0).map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/profile",
    responses(
        (status = 200, description = "Display profile, or null if none", body = Option<Profile>),
        (status = 401, description = "Not signed in", body = AppError)
    ),
    tag = "session"
)]
#[tracing::instrument(skip_all)]
pub async fn get_profile(
    State(directory): State<Arc<AccountDirectory>>,
    auth: AuthRequired,
) -> Result<Json<Option<Profile>>, AppError> {
    service::profile_for(&directory, &auth.0).map(Json)
}
