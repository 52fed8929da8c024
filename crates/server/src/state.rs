use axum::extract::FromRef;
use shared_types::AuthSettings;
use std::sync::Arc;

use crate::directory::AccountDirectory;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract each field directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub directory: Arc<AccountDirectory>,
    pub auth: AuthSettings,
}

impl AppState {
    pub fn new(directory: Arc<AccountDirectory>, auth: AuthSettings) -> Self {
        Self { directory, auth }
    }
}
