use dioxus::prelude::*;

use crate::components::classed;

/// Labelled form field with an optional inline error.
///
/// When `error` is set the input is marked `aria-invalid` and the message
/// is shown under it.
#[component]
pub fn Input(
    label: String,
    name: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] autocomplete: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let error_id = format!("{name}-error");
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "field",
            span { class: "field-label", "{label}" }
            input {
                r#type: "{input_type}",
                name: "{name}",
                value,
                placeholder,
                disabled,
                autocomplete,
                aria_invalid: invalid,
                aria_describedby: invalid.then(|| error_id.clone()),
                oninput: move |evt| on_input.call(evt),
                ..classed("field-input", attributes),
            }
            if let Some(message) = error {
                span { id: "{error_id}", class: "field-error", "{message}" }
            }
        }
    }
}
