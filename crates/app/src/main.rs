use dioxus::prelude::*;
use shared_types::{FeatureFlags, Fetch, DEFAULT_AUTH_ROUTE};

mod auth;
mod routes;
mod sources;
use auth::{AuthState, EntryRoute};
use routes::Route;
use sources::DashboardSources;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let _ = dotenvy::dotenv();
        let config = server::config::load_config();

        if config.features.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let directory = server::directory::get_directory();
        if directory.is_empty() {
            tracing::warn!("No accounts configured, nobody will be able to sign in");
        }

        let mut router = dioxus::server::router(App)
            .merge(server::openapi::api_router(directory, config.auth.clone()));

        if config.features.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(axum::middleware::from_fn(
                server::auth::middleware::auth_middleware,
            ))
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults all-off on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;
    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();
    use_context_provider(|| flags);

    let entry_resource =
        use_server_future(move || async move { server::api::get_entry_route().await })?;
    let entry_route = entry_resource
        .read()
        .as_ref()
        .and_then(|r| r.as_ref().ok().cloned())
        .unwrap_or_else(|| DEFAULT_AUTH_ROUTE.to_string());
    use_context_provider(|| EntryRoute(entry_route));

    let mut auth = use_context_provider(AuthState::new);
    let sources = use_context_provider(DashboardSources::server);

    // Resolve the session once per mount. A sign-in that lands first wins.
    use_hook(move || {
        let sessions = sources.sessions.clone();
        spawn(async move {
            let result = sessions.current_session().await;
            if let Err(e) = &result {
                tracing::warn!(%e, "Session lookup failed, treating as signed out");
            }
            if auth.session.peek().is_pending() {
                auth.session.set(Fetch::from(result));
            }
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "app-loading",
                    shared_ui::Spinner {}
                }
            },
            Router::<Route> {}
        }
    }
}
