mod content;
mod view;

use dioxus::prelude::*;
use shared_types::{entry_route_with_redirect, DashboardFeeds, Fetch, RedirectGuard, Session};

use crate::auth::{self, use_auth, EntryRoute};
use crate::sources::DashboardSources;
use view::DashboardView;

/// Path the auth screen sends the user back to.
const DASHBOARD_PATH: &str = "/";

/// Authenticated landing page.
///
/// Roles and profile are fetched per session; results are tagged with the
/// session id they were requested for and folded into [`DashboardFeeds`],
/// which decides what to render and when to redirect.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let sources = use_context::<DashboardSources>();
    let EntryRoute(entry_route) = use_context::<EntryRoute>();

    let session = use_memo(move || auth.session.read().clone());
    let current = use_memo(move || session.read().loaded().cloned().flatten());

    let role_source = sources.roles.clone();
    let roles = use_resource(move || {
        let source = role_source.clone();
        let session: Option<Session> = current();
        async move {
            let session = session?;
            let result = source.roles_for(&session).await;
            if let Err(e) = &result {
                tracing::warn!(account = %session.id, %e, "Role lookup failed");
            }
            Some((session.id, Fetch::from(result)))
        }
    });

    let profile_source = sources.profiles.clone();
    let profile = use_resource(move || {
        let source = profile_source.clone();
        let session: Option<Session> = current();
        async move {
            let session = session?;
            let result = source.profile_for(&session).await;
            if let Err(e) = &result {
                tracing::warn!(account = %session.id, %e, "Profile lookup failed");
            }
            Some((session.id, Fetch::from(result)))
        }
    });

    let feeds = use_memo(move || {
        let mut feeds = DashboardFeeds::with_session(session());
        if let Some(Some((id, result))) = &*roles.read() {
            if !feeds.apply_roles(id, result.clone()) {
                tracing::debug!(session = %id, "Dropped role result for another session");
            }
        }
        if let Some(Some((id, result))) = &*profile.read() {
            if !feeds.apply_profile(id, result.clone()) {
                tracing::debug!(session = %id, "Dropped profile result for another session");
            }
        }
        feeds
    });

    let readiness = use_memo(move || feeds.read().readiness());
    let mut guard = use_signal(RedirectGuard::new);
    let navigator = sources.navigator.clone();
    use_effect(move || {
        let state = readiness();
        tracing::debug!(?state, "Dashboard readiness");
        if guard.write().observe(state) {
            let target = entry_route_with_redirect(&entry_route, DASHBOARD_PATH);
            tracing::info!(%target, "No session, redirecting to sign-in");
            navigator.navigate(&target);
        }
    });

    let today = chrono::Local::now().date_naive();
    let screen = feeds.read().screen(today);

    rsx! {
        DashboardView {
            screen,
            on_sign_out: move |_| {
                spawn(auth::sign_out(auth));
            },
        }
    }
}
