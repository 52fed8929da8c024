use crate::routes::Route;
use dioxus::prelude::*;

/// Catch-all for paths that match no route.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }
        div { class: "not-found",
            h1 { class: "not-found-code", "404" }
            p { class: "not-found-message", "Nothing lives at " code { "{path}" } }
            Link { class: "not-found-link", to: Route::Dashboard {}, "Back to the dashboard" }
        }
    }
}
