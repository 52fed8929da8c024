use dioxus::prelude::*;
use shared_types::{Fetch, Session};

/// Global authentication state.
///
/// `Pending` until the session lookup at mount finishes; sign-in and
/// sign-out write here directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Fetch<Option<Session>>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Fetch::Pending),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(&*self.session.read(), Fetch::Loaded(Some(_)))
    }

    pub fn set_session(&mut self, session: Session) {
        self.session.set(Fetch::Loaded(Some(session)));
    }

    pub fn clear(&mut self) {
        self.session.set(Fetch::Loaded(None));
    }
}

/// Route unauthenticated visitors are sent to.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryRoute(pub String);

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// End the session on the server, then drop it locally. The local state is
/// cleared even when the server call fails so the user is never stuck.
pub async fn sign_out(mut auth: AuthState) {
    if let Err(e) = server::api::sign_out().await {
        tracing::warn!(%e, "Sign-out request failed");
    }
    auth.clear();
}
