use dioxus::prelude::*;

/// Offset-style pagination control.
///
/// "Next" is driven by the page-fullness heuristic, so the last page of an
/// exactly-divisible list still offers a (then empty) successor.
#[component]
pub fn PaginationControl(
    current_page: u32,
    has_next_page: bool,
    item_count: usize,
    on_page_change: EventHandler<u32>,
) -> Element {
    rsx! {
        div {
            class: "pagination",
            p {
                class: "pagination-summary",
                "Page {current_page} - Showing {item_count} items"
            }
            div {
                class: "pagination-buttons",
                button {
                    class: "secondary",
                    disabled: current_page <= 1,
                    onclick: move |_| on_page_change.call(current_page.saturating_sub(1).max(1)),
                    "Previous"
                }
                span { class: "pagination-current", "{current_page}" }
                if has_next_page {
                    span { class: "pagination-peek", "{current_page + 1}" }
                }
                button {
                    class: "secondary",
                    disabled: !has_next_page,
                    onclick: move |_| on_page_change.call(current_page + 1),
                    "Next"
                }
            }
        }
    }
}
