use dioxus::prelude::*;

/// Centered spinning indicator. Renders nothing else.
#[component]
pub fn Spinner(#[props(default = "Loading".to_string())] label: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "spinner-wrapper", role: "status", aria_label: "{label}",
            div { class: "spinner" }
        }
    }
}
