use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot};
use super::jwt::validate_session_token;

/// Permissive session middleware.
///
/// Validates the session token (cookie or Bearer header) and inserts its
/// `Claims` into request extensions, inserts a `CookieSlot` for handlers,
/// and applies any scheduled cookie change to the response.
///
/// Never rejects a request; handlers decide what needs a session.
pub async fn auth_middleware(mut req: Request, next: Next) -> Response {
    let token = cookies::extract_session_token(req.headers());
    let mut stale_cookie = false;

    if let Some(token) = token {
        match validate_session_token(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(e) => {
                tracing::debug!(%e, "Ignoring invalid session token");
                stale_cookie = true;
            }
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if stale_cookie && cookie_slot.is_empty() {
        cookie_slot.schedule(cookies::PendingCookieAction::Clear);
    }
    cookie_slot.apply(response.headers_mut());

    response
}
