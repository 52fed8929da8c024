use chrono::NaiveDate;

use crate::display::{greeting_name, long_date};
use crate::role::{known_roles, role_labels};
use crate::{Fetch, Profile, Readiness, RoleCode, Session};

/// A fetch result tagged with the session it was requested for.
#[derive(Debug, Clone, PartialEq)]
struct Keyed<T> {
    session_id: String,
    value: Fetch<T>,
}

/// The three data sources behind the dashboard.
///
/// Role and profile results are keyed by session id. While the session is
/// still pending, results are held; once it resolves, any result keyed to
/// another identity is dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardFeeds {
    session: Fetch<Option<Session>>,
    roles: Option<Keyed<Vec<String>>>,
    profile: Option<Keyed<Option<Profile>>>,
}

impl DashboardFeeds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Fetch<Option<Session>>) -> Self {
        let mut feeds = Self::new();
        feeds.set_session(session);
        feeds
    }

    /// Replace the session state. Once the identity is known, results keyed
    /// to anyone else are dropped.
    pub fn set_session(&mut self, session: Fetch<Option<Session>>) {
        self.session = session;
        if self.session.is_pending() {
            return;
        }
        let current = self.session_id().map(str::to_owned);
        let stale = |id: &String| Some(id) != current.as_ref();
        if self.roles.as_ref().is_some_and(|k| stale(&k.session_id)) {
            self.roles = None;
        }
        if self.profile.as_ref().is_some_and(|k| stale(&k.session_id)) {
            self.profile = None;
        }
    }

    /// Apply a role lookup result for `session_id`. Returns `false` when the
    /// result was discarded.
    pub fn apply_roles(&mut self, session_id: &str, value: Fetch<Vec<String>>) -> bool {
        if !self.accepts(session_id) {
            return false;
        }
        self.roles = Some(Keyed {
            session_id: session_id.to_string(),
            value,
        });
        true
    }

    /// Apply a profile lookup result for `session_id`. Returns `false` when
    /// the result was discarded.
    pub fn apply_profile(&mut self, session_id: &str, value: Fetch<Option<Profile>>) -> bool {
        if !self.accepts(session_id) {
            return false;
        }
        self.profile = Some(Keyed {
            session_id: session_id.to_string(),
            value,
        });
        true
    }

    /// Pending sessions accept anything; [`set_session`](Self::set_session)
    /// sorts it out when the identity arrives.
    fn accepts(&self, session_id: &str) -> bool {
        self.session.is_pending() || self.session_id() == Some(session_id)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.loaded().and_then(Option::as_ref)
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session().map(|s| s.id.as_str())
    }

    /// Role lookup state for the current session.
    pub fn roles(&self) -> Fetch<&Vec<String>> {
        match &self.roles {
            Some(keyed) => keyed.value.as_ref(),
            None => Fetch::Pending,
        }
    }

    /// Loaded profile for the current session, if any.
    pub fn profile(&self) -> Option<&Profile> {
        self.profile
            .as_ref()
            .and_then(|keyed| keyed.value.loaded())
            .and_then(Option::as_ref)
    }

    pub fn readiness(&self) -> Readiness {
        Readiness::resolve(&self.session, &self.roles())
    }

    /// What to render, with `today` as the date shown in the greeting.
    pub fn screen(&self, today: NaiveDate) -> DashboardScreen {
        match self.readiness() {
            Readiness::Initializing | Readiness::LoadingRoles => DashboardScreen::Loading,
            Readiness::Unauthenticated => DashboardScreen::Blank,
            Readiness::Ready => DashboardScreen::Content(self.summary(today)),
        }
    }

    fn summary(&self, today: NaiveDate) -> DashboardSummary {
        let codes: &[String] = match self.roles() {
            Fetch::Loaded(codes) => codes.as_slice(),
            Fetch::Pending | Fetch::Failed(_) => &[],
        };

        DashboardSummary {
            greeting_name: greeting_name(self.profile(), self.session()),
            date_label: long_date(today),
            role_count: codes.len(),
            role_labels: role_labels(Some(codes)),
            roles: known_roles(codes),
        }
    }
}

/// Rendering decision for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardScreen {
    /// Loading indicator only.
    Loading,
    /// Nothing; a redirect is pending.
    Blank,
    Content(DashboardSummary),
}

/// Derived values shown on the ready dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub greeting_name: String,
    pub date_label: String,
    /// Number of role codes returned by the role source.
    pub role_count: usize,
    pub role_labels: String,
    /// Known roles in input order, for badges.
    pub roles: Vec<RoleCode>,
}
