// Server-only session helpers for server functions.

use dioxus::prelude::*;
use shared_types::AppError;

use crate::auth::{cookies, jwt};
use crate::error_convert::AppErrorExt;

/// Claims for the current request, if it carries a valid session.
///
/// Reads the claims the middleware validated, falling back to parsing the
/// cookie directly when the middleware did not run.
pub(crate) fn current_claims() -> Option<jwt::Claims> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Some(claims.clone());
    }

    let token = cookies::extract_session_token(&parts.headers)?;
    jwt::validate_session_token(&token).ok()
}

/// Like [`current_claims`], but an absent session is a 401.
pub(crate) fn require_auth() -> Result<jwt::Claims, ServerFnError> {
    current_claims()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())
}
