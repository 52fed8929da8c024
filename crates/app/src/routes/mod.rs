pub mod auth;
pub mod dashboard;
pub mod not_found;

use auth::Auth;
use dashboard::Dashboard;
use dioxus::prelude::*;
use not_found::NotFound;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/auth?:redirect")]
    Auth { redirect: Option<String> },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_the_dashboard() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Dashboard {}));
    }

    #[test]
    fn auth_without_redirect() {
        assert_eq!(
            "/auth".parse::<Route>().ok(),
            Some(Route::Auth { redirect: None })
        );
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert!(matches!(
            "/batches/42".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }
}
