use async_trait::async_trait;

use crate::{AppError, Profile, Session};

/// Resolves the current session, if any.
#[async_trait(?Send)]
pub trait SessionSource {
    async fn current_session(&self) -> Result<Option<Session>, AppError>;
}

/// Looks up the role codes assigned to a session's user.
#[async_trait(?Send)]
pub trait RoleSource {
    async fn roles_for(&self, session: &Session) -> Result<Vec<String>, AppError>;
}

/// Looks up the display profile for a session's user.
#[async_trait(?Send)]
pub trait ProfileSource {
    async fn profile_for(&self, session: &Session) -> Result<Option<Profile>, AppError>;
}

/// Client-side route changes.
pub trait Navigator {
    fn navigate(&self, route: &str);
}

/// Entry route with a return target, e.g. `/auth?redirect=%2F`.
pub fn entry_route_with_redirect(entry_route: &str, return_to: &str) -> String {
    format!("{entry_route}?redirect={}", urlencoding::encode(return_to))
}
