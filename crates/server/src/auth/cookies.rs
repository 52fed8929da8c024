use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use shared_types::AppError;
use std::sync::{Arc, Mutex};

pub const SESSION_COOKIE: &str = "vitacore_session";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN")
        .ok()
        .filter(|d| !d.is_empty())
}

fn session_cookie(value: &str, max_age: cookie::time::Duration) -> Result<HeaderValue, AppError> {
    let mut cookie = Cookie::build((SESSION_COOKIE, value))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .secure(cookie_secure());

    if let Some(domain) = cookie_domain() {
        cookie = cookie.domain(domain);
    }

    HeaderValue::from_str(&cookie.build().to_string())
        .map_err(|e| AppError::internal(format!("invalid session cookie: {e}")))
}

/// Set-Cookie value carrying a session token.
pub fn build_session_cookie(token: &str, max_age_minutes: i64) -> Result<HeaderValue, AppError> {
    session_cookie(token, cookie::time::Duration::minutes(max_age_minutes))
}

/// Set-Cookie value that removes the session cookie.
pub fn build_clear_cookie() -> Result<HeaderValue, AppError> {
    session_cookie("", cookie::time::Duration::ZERO)
}

/// Session token from the cookie (preferred) or a Bearer header (fallback).
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, SESSION_COOKIE) {
        return Some(token);
    }

    // REST clients
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse(piece.trim().to_string()) {
                    if c.name() == name && !c.value().is_empty() {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}

/// Cookie change requested by a handler, applied by the middleware.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set { token: String, max_age_minutes: i64 },
    Clear,
}

/// Per-request slot through which handlers schedule cookie changes.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn schedule(&self, action: PendingCookieAction) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(action);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().map(|slot| slot.is_none()).unwrap_or(true)
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }

    /// Write the pending action, if any, onto response headers.
    pub fn apply(&self, headers: &mut HeaderMap) {
        let value = match self.take() {
            Some(PendingCookieAction::Set {
                token,
                max_age_minutes,
            }) => build_session_cookie(&token, max_age_minutes),
            Some(PendingCookieAction::Clear) => build_clear_cookie(),
            None => return,
        };
        match value {
            Ok(value) => {
                headers.append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::error!(%e, "Dropping session cookie change"),
        }
    }
}

fn schedule(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            slot.schedule(action);
        }
    }
}

/// Schedule the session cookie from inside a server function.
pub fn schedule_session_cookie(token: &str, max_age_minutes: i64) {
    schedule(PendingCookieAction::Set {
        token: token.to_string(),
        max_age_minutes,
    });
}

/// Schedule removal of the session cookie from inside a server function.
pub fn schedule_clear_cookie() {
    schedule(PendingCookieAction::Clear);
}
