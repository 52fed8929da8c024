use axum::{extract::State, http::StatusCode, Json};
use shared_types::{AppError, AuthSettings, Session, SignInRequest};
use std::sync::Arc;

use crate::auth::cookies::PendingCookieAction;
use crate::auth::extractors::{Cookies, MaybeAuth};
use crate::auth::service;
use crate::directory::AccountDirectory;

#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in; session cookie set", body = Session),
        (status = 401, description = "Invalid email or password", body = AppError),
        (status = 422, description = "Validation error", body = AppError)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip_all)]
pub async fn sign_in(
    State(directory): State<Arc<AccountDirectory>>,
    State(settings): State<AuthSettings>,
    Cookies(slot): Cookies,
    Json(payload): Json<SignInRequest>,
) -> Result<Json<Session>, AppError> {
    let signed_in = service::sign_in(&directory, &payload, settings.session_minutes)?;
    slot.schedule(PendingCookieAction::Set {
        token: signed_in.token,
        max_age_minutes: signed_in.max_age_minutes,
    });
    Ok(Json(signed_in.session))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-out",
    responses(
        (status = 204, description = "Signed out; session cookie cleared")
    ),
    tag = "auth"
)]
#[tracing::instrument(skip_all)]
pub async fn sign_out(auth: MaybeAuth, Cookies(slot): Cookies) -> StatusCode {
    if let Some(claims) = auth.0 {
        tracing::info!(account = %claims.sub, "Signed out");
    }
    slot.schedule(PendingCookieAction::Clear);
    StatusCode::NO_CONTENT
}
