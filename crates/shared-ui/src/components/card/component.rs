use dioxus::prelude::*;

use crate::components::classed;

/// Bordered panel used for dashboard widgets.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..classed("card", attributes), {children} }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        div { ..classed("card-header", attributes), {children} }
    }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        h3 { ..classed("card-title", attributes), {children} }
    }
}

/// Muted secondary line under a card title.
#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        p { ..classed("card-description", attributes), {children} }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        div { ..classed("card-content", attributes), {children} }
    }
}

/// Card showing one headline figure with an icon and a caption.
///
/// `value` is rendered large; `caption` sits below it. `footer` goes under
/// the caption, e.g. a row of badges.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    caption: String,
    icon: Option<Element>,
    footer: Option<Element>,
) -> Element {
    rsx! {
        Card { class: "stat-card",
            CardHeader { class: "stat-card-header",
                CardTitle { class: "stat-card-title", "{title}" }
                span { class: "stat-card-icon", aria_hidden: "true", {icon} }
            }
            CardContent {
                div { class: "stat-card-value", "{value}" }
                p { class: "stat-card-caption", "{caption}" }
                {footer}
            }
        }
    }
}
