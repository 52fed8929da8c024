use dioxus::prelude::*;
use shared_types::{FeatureFlags, Profile, Session};

#[cfg(feature = "server")]
use super::auth::{current_claims, require_auth};

#[cfg(feature = "server")]
use crate::error_convert::ServerFnResultExt;

/// Get the current feature flags. No auth required; flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// Route unauthenticated visitors are sent to.
#[server]
pub async fn get_entry_route() -> Result<String, ServerFnError> {
    Ok(crate::config::auth_settings().entry_route.clone())
}

/// The caller's session, or `None` when signed out.
///
/// A token whose account has disappeared from the directory counts as
/// signed out and its cookie is cleared.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_session() -> Result<Option<Session>, ServerFnError> {
    use crate::auth::{cookies, service};

    let Some(claims) = current_claims() else {
        return Ok(None);
    };

    let directory = crate::directory::get_directory();
    let session = service::current_session(&directory, &claims);
    if session.is_none() {
        tracing::info!(account = %claims.sub, "Session refers to an unknown account");
        cookies::schedule_clear_cookie();
    }
    Ok(session)
}

/// Role codes assigned to the signed-in user, in stored order.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_user_roles() -> Result<Vec<String>, ServerFnError> {
    use crate::auth::service;

    let claims = require_auth()?;
    let directory = crate::directory::get_directory();
    service::roles_for(&directory, &claims).into_server_fn_result()
}

/// Display profile for the signed-in user, if one exists.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_profile() -> Result<Option<Profile>, ServerFnError> {
    use crate::auth::service;

    let claims = require_auth()?;
    let directory = crate::directory::get_directory();
    service::profile_for(&directory, &claims).into_server_fn_result()
}

/// Check credentials and start a session. The session cookie is set on the
/// response.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn sign_in(email: String, password: String) -> Result<Session, ServerFnError> {
    use crate::auth::{cookies, service};
    use shared_types::SignInRequest;

    let request = SignInRequest { email, password };
    let directory = crate::directory::get_directory();
    let minutes = crate::config::auth_settings().session_minutes;

    let signed_in = service::sign_in(&directory, &request, minutes).into_server_fn_result()?;
    cookies::schedule_session_cookie(&signed_in.token, signed_in.max_age_minutes);
    Ok(signed_in.session)
}

/// End the session by clearing the cookie. Succeeds when already signed out.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn sign_out() -> Result<(), ServerFnError> {
    if let Some(claims) = current_claims() {
        tracing::info!(account = %claims.sub, "Signed out");
    }
    crate::auth::cookies::schedule_clear_cookie();
    Ok(())
}
