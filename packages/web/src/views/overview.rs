use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBoxOpen, FaComment, FaLayerGroup, FaUsers};
use dioxus_free_icons::Icon;

use ui::{use_paginated_list, use_session, SpinnerInline, StatusBadge};

#[component]
pub fn Overview() -> Element {
    let session = use_session();

    let products = use_paginated_list(use_signal(|| 1u32).into(), 5, move |p, l| {
        let client = session.client();
        async move { client.list_products(p, l).await }
    });
    let team = use_paginated_list(use_signal(|| 1u32).into(), 5, move |p, l| {
        let client = session.client();
        async move { client.list_team(p, l).await }
    });
    let features = use_paginated_list(use_signal(|| 1u32).into(), 5, move |p, l| {
        let client = session.client();
        async move { client.list_features(p, l).await }
    });
    let testimonials = use_paginated_list(use_signal(|| 1u32).into(), 5, move |p, l| {
        let client = session.client();
        async move { client.list_testimonials(p, l).await }
    });

    // Prefer the server total when the envelope carried one.
    let stat = |count: Option<u64>, shown: usize| -> String {
        match count {
            Some(total) => total.to_string(),
            None => shown.to_string(),
        }
    };

    let user_name = session
        .user()
        .map(|u| u.name)
        .unwrap_or_else(|| "there".to_string());

    rsx! {
        div {
            class: "view-page",

            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-subtitle", "Welcome back, {user_name}" }
                }
            }

            div {
                class: "stat-grid",
                div {
                    class: "card stat-card",
                    Icon { icon: FaBoxOpen, width: 20, height: 20 }
                    div {
                        span { class: "stat-value",
                            if products.loading() { "..." } else { {stat(products.count(), products.items().len())} }
                        }
                        span { class: "stat-label", "Products" }
                    }
                }
                div {
                    class: "card stat-card",
                    Icon { icon: FaUsers, width: 20, height: 20 }
                    div {
                        span { class: "stat-value",
                            if team.loading() { "..." } else { {stat(team.count(), team.items().len())} }
                        }
                        span { class: "stat-label", "Team members" }
                    }
                }
                div {
                    class: "card stat-card",
                    Icon { icon: FaLayerGroup, width: 20, height: 20 }
                    div {
                        span { class: "stat-value",
                            if features.loading() { "..." } else { {stat(features.count(), features.items().len())} }
                        }
                        span { class: "stat-label", "Features" }
                    }
                }
                div {
                    class: "card stat-card",
                    Icon { icon: FaComment, width: 20, height: 20 }
                    div {
                        span { class: "stat-value",
                            if testimonials.loading() { "..." } else { {stat(testimonials.count(), testimonials.items().len())} }
                        }
                        span { class: "stat-label", "Testimonials" }
                    }
                }
            }

            div {
                class: "overview-grid",

                div {
                    class: "card",
                    h2 { class: "card-title", "Recent products" }
                    if products.loading() {
                        SpinnerInline {}
                    } else if products.items().is_empty() {
                        div { class: "table-empty", "No products yet." }
                    } else {
                        ul {
                            class: "overview-list",
                            for product in products.items() {
                                li {
                                    key: "{product.id}",
                                    span { "{product.name}" }
                                    StatusBadge { status: product.status.clone() }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "card",
                    h2 { class: "card-title", "Team" }
                    if team.loading() {
                        SpinnerInline {}
                    } else if team.items().is_empty() {
                        div { class: "table-empty", "No team members yet." }
                    } else {
                        ul {
                            class: "overview-list",
                            for member in team.items() {
                                li {
                                    key: "{member.id}",
                                    span { "{member.name}" }
                                    span { class: "cell-muted", "{member.position}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
