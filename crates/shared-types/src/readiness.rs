use crate::{Fetch, Session};

/// What the dashboard may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Session lookup in flight.
    Initializing,
    /// Session resolved to absent or failed.
    Unauthenticated,
    /// Session present, role lookup in flight.
    LoadingRoles,
    /// Session present, roles resolved (possibly empty or failed).
    Ready,
}

impl Readiness {
    /// Combine the session and role sources into a single view state.
    ///
    /// A failed session lookup counts as "no session"; a failed role lookup
    /// counts as "no roles".
    pub fn resolve<R>(session: &Fetch<Option<Session>>, roles: &Fetch<R>) -> Self {
        match session {
            Fetch::Pending => Readiness::Initializing,
            Fetch::Loaded(None) | Fetch::Failed(_) => Readiness::Unauthenticated,
            Fetch::Loaded(Some(_)) => {
                if roles.is_pending() {
                    Readiness::LoadingRoles
                } else {
                    Readiness::Ready
                }
            }
        }
    }
}

/// Edge trigger for the unauthenticated redirect.
///
/// Fires once per transition into [`Readiness::Unauthenticated`], no matter
/// how many times the same state is observed afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RedirectGuard {
    last: Option<Readiness>,
}

impl RedirectGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `state`; returns `true` when the redirect should run now.
    pub fn observe(&mut self, state: Readiness) -> bool {
        let entered = state == Readiness::Unauthenticated
            && self.last != Some(Readiness::Unauthenticated);
        self.last = Some(state);
        entered
    }
}
