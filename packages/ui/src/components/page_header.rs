use dioxus::prelude::*;

/// Standard page heading with an action slot on the right.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "page-header",
            div {
                h1 { class: "page-title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            div {
                class: "page-header-actions",
                {children}
            }
        }
    }
}
