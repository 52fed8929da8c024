//! Server-backed implementations of the dashboard's data sources.

use std::rc::Rc;

use async_trait::async_trait;
use dioxus::prelude::*;
use shared_types::{
    AppError, Navigator, Profile, ProfileSource, RoleSource, Session, SessionSource,
};

use crate::routes::Route;

fn to_app_error(err: ServerFnError) -> AppError {
    AppError::from_server_fn_message(&err.to_string())
}

/// Talks to the server functions in `server::api`. The session cookie
/// identifies the caller, so the `Session` argument only keys the request.
pub struct ServerSources;

#[async_trait(?Send)]
impl SessionSource for ServerSources {
    async fn current_session(&self) -> Result<Option<Session>, AppError> {
        server::api::get_session().await.map_err(to_app_error)
    }
}

#[async_trait(?Send)]
impl RoleSource for ServerSources {
    async fn roles_for(&self, _session: &Session) -> Result<Vec<String>, AppError> {
        server::api::get_user_roles().await.map_err(to_app_error)
    }
}

#[async_trait(?Send)]
impl ProfileSource for ServerSources {
    async fn profile_for(&self, _session: &Session) -> Result<Option<Profile>, AppError> {
        server::api::get_profile().await.map_err(to_app_error)
    }
}

/// Navigates with the Dioxus router. Paths that match no [`Route`] are
/// handed to the browser as external navigation.
pub struct RouterNavigator;

impl Navigator for RouterNavigator {
    fn navigate(&self, route: &str) {
        match route.parse::<Route>() {
            Ok(target) => {
                navigator().push(target);
            }
            Err(_) => {
                navigator().push(NavigationTarget::<Route>::External(route.to_string()));
            }
        }
    }
}

/// Collaborators the dashboard reads from, provided as context so views
/// can be driven by other implementations.
#[derive(Clone)]
pub struct DashboardSources {
    pub sessions: Rc<dyn SessionSource>,
    pub roles: Rc<dyn RoleSource>,
    pub profiles: Rc<dyn ProfileSource>,
    pub navigator: Rc<dyn Navigator>,
}

impl DashboardSources {
    pub fn server() -> Self {
        let backend = Rc::new(ServerSources);
        Self {
            sessions: backend.clone(),
            roles: backend.clone(),
            profiles: backend,
            navigator: Rc::new(RouterNavigator),
        }
    }
}
