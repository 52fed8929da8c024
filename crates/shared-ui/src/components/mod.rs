use dioxus::prelude::*;

pub mod app_shell;
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod page_header;
pub mod spinner;

pub use app_shell::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use page_header::*;
pub use spinner::*;

/// Base `class` merged with caller attributes; a caller `class` is appended.
pub(crate) fn classed(class: &'static str, extra: Vec<Attribute>) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", class, None, false)],
        extra,
    ])
}
