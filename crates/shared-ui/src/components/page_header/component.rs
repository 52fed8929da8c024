use dioxus::prelude::*;

/// Page heading with an optional tagline and action area.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] tagline: Option<String>,
    actions: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div {
                h1 { class: "page-title", "{title}" }
                if let Some(tagline) = tagline {
                    p { class: "page-tagline", "{tagline}" }
                }
            }
            div { class: "page-actions", {actions} }
        }
    }
}
