use dioxus::prelude::*;

/// Top-level page frame: a header bar with the brand and an actions slot,
/// and a main content area.
#[component]
pub fn AppShell(
    brand: String,
    actions: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "app-shell",
            header { class: "app-shell-header",
                span { class: "app-shell-brand", "{brand}" }
                div { class: "app-shell-actions", {actions} }
            }
            main { class: "app-shell-main", {children} }
        }
    }
}
