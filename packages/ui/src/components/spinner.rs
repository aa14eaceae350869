use dioxus::prelude::*;

/// Full-area loading spinner.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}

/// Compact spinner for table/card bodies.
#[component]
pub fn SpinnerInline() -> Element {
    rsx! {
        div {
            class: "spinner-inline",
            div { class: "spinner spinner-small" }
            span { "Loading..." }
        }
    }
}
