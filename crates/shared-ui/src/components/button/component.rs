use dioxus::prelude::*;

use crate::components::classed;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    /// Filled with the brand colour. Main action of a form.
    #[default]
    Primary,
    /// Bordered and transparent. Secondary actions such as signing out.
    Outline,
}

impl ButtonVariant {
    fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Outline => "outline",
        }
    }
}

/// Button with a variant and a busy state.
///
/// `kind` is the HTML `type`; pass `"submit"` inside forms. A busy button
/// is disabled and marked `aria-busy`.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button")] kind: &'static str,
    #[props(default)] disabled: bool,
    #[props(default)] busy: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: kind,
            disabled: disabled || busy,
            aria_busy: busy,
            "data-variant": variant.as_str(),
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..classed("button", attributes),
            {children}
        }
    }
}
