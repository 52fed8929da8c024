use dioxus::prelude::*;

use crate::components::classed;

/// How loudly a badge stands out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    /// Pale accent fill.
    #[default]
    Soft,
    /// Brand colour fill.
    Solid,
}

impl BadgeTone {
    fn as_str(&self) -> &'static str {
        match self {
            BadgeTone::Soft => "soft",
            BadgeTone::Solid => "solid",
        }
    }
}

/// Inline pill label, e.g. a role name.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { "data-tone": tone.as_str(), ..classed("badge", attributes), {children} }
    }
}
