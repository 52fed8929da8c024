use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::AppError;

use super::cookies::CookieSlot;
use super::jwt::Claims;

/// Requires a valid session. Rejects with 401 otherwise.
pub struct AuthRequired(pub Claims);

impl<S: Send + Sync> FromRequestParts<S> for AuthRequired {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthRequired)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// Session claims if present. Never fails.
pub struct MaybeAuth(pub Option<Claims>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuth(parts.extensions.get::<Claims>().cloned()))
    }
}

/// The request's cookie slot. Requests that bypassed the middleware get a
/// detached slot whose changes are dropped.
pub struct Cookies(pub CookieSlot);

impl<S: Send + Sync> FromRequestParts<S> for Cookies {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Cookies(
            parts.extensions.get::<CookieSlot>().cloned().unwrap_or_default(),
        ))
    }
}
