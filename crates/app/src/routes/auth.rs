use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
};

/// Where to go after signing in. Only same-site paths are honoured.
fn destination(redirect: Option<&str>) -> Route {
    redirect
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .and_then(|path| path.parse::<Route>().ok())
        .filter(|route| !matches!(route, Route::Auth { .. }))
        .unwrap_or(Route::Dashboard {})
}

/// Sign-in screen. Whoever holds a session, whether on arrival or after
/// signing in here, is sent on to their destination.
#[component]
pub fn Auth(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);
    let mut field_errors = use_signal(std::collections::HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);
    let target = use_signal(move || destination(redirect.as_deref()));

    use_effect(move || {
        if auth.is_signed_in() {
            navigator().push(target());
        }
    });

    let handle_sign_in = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(Default::default());

        match server::api::sign_in(email(), password()).await {
            Ok(session) => {
                tracing::info!(account = %session.id, "Signed in");
                auth.set_session(session);
            }
            Err(e) => {
                let err_str = e.to_string();
                let fields = AppError::parse_field_errors(&err_str);
                if fields.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fields);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign in to VitaCore" }
                    CardDescription { "Cannabis Cultivation Management System" }
                }
                CardContent {
                    form { class: "auth-form", onsubmit: handle_sign_in,
                        if let Some(msg) = error_msg() {
                            p { class: "auth-error", role: "alert", "{msg}" }
                        }
                        Input {
                            label: "Email",
                            name: "email",
                            input_type: "email",
                            autocomplete: "email".to_string(),
                            placeholder: "you@farm.example",
                            value: email(),
                            disabled: loading(),
                            error: field_errors.read().get("email").cloned(),
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        Input {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            autocomplete: "current-password".to_string(),
                            value: password(),
                            disabled: loading(),
                            error: field_errors.read().get("password").cloned(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        Button {
                            class: "auth-submit",
                            variant: ButtonVariant::Primary,
                            kind: "submit",
                            busy: loading(),
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                    }
                }
            }
        }
    }
}
