use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaAward, FaBoxOpen, FaCalendarDays, FaCode, FaComment, FaEnvelope, FaGauge, FaGear,
    FaLayerGroup, FaRightFromBracket, FaUser, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::session::use_session;

/// Dashboard navigation sidebar.
///
/// Navigation is delegated to the host app via `on_navigate` (page key) so
/// this crate stays independent of the router's `Route` type.
#[component]
pub fn DashboardSidebar(
    active: String,
    on_navigate: EventHandler<String>,
    on_logged_out: EventHandler<()>,
) -> Element {
    let session = use_session();
    let user = session.user();

    let item_class = |key: &str| {
        if active == key {
            "sidebar-item active"
        } else {
            "sidebar-item"
        }
    };

    rsx! {
        document::Stylesheet { href: crate::SIDEBAR_CSS }

        div {
            class: "sidebar",

            // User header
            div {
                class: "sidebar-user",
                if let Some(ref u) = user {
                    if let Some(ref avatar) = u.avatar {
                        if !avatar.url.is_empty() {
                            img {
                                class: "sidebar-user-avatar",
                                src: "{avatar.url}",
                                alt: "Avatar",
                            }
                        }
                    }
                    div {
                        span { class: "sidebar-user-name", "{u.name}" }
                        span { class: "sidebar-user-role", "{u.role}" }
                    }
                } else {
                    span { class: "sidebar-user-name", "DevTeam Admin" }
                }
            }

            // Navigation
            div {
                class: "sidebar-nav",
                button {
                    class: item_class("overview"),
                    onclick: move |_| on_navigate.call("overview".to_string()),
                    Icon { icon: FaGauge, width: 14, height: 14 }
                    span { "Overview" }
                }
                button {
                    class: item_class("products"),
                    onclick: move |_| on_navigate.call("products".to_string()),
                    Icon { icon: FaBoxOpen, width: 14, height: 14 }
                    span { "Products" }
                }
                button {
                    class: item_class("team"),
                    onclick: move |_| on_navigate.call("team".to_string()),
                    Icon { icon: FaUsers, width: 14, height: 14 }
                    span { "Team" }
                }
                button {
                    class: item_class("technologies"),
                    onclick: move |_| on_navigate.call("technologies".to_string()),
                    Icon { icon: FaCode, width: 14, height: 14 }
                    span { "Technologies" }
                }
                button {
                    class: item_class("features"),
                    onclick: move |_| on_navigate.call("features".to_string()),
                    Icon { icon: FaLayerGroup, width: 14, height: 14 }
                    span { "Features" }
                }
                button {
                    class: item_class("testimonials"),
                    onclick: move |_| on_navigate.call("testimonials".to_string()),
                    Icon { icon: FaComment, width: 14, height: 14 }
                    span { "Testimonials" }
                }
                button {
                    class: item_class("contacts"),
                    onclick: move |_| on_navigate.call("contacts".to_string()),
                    Icon { icon: FaEnvelope, width: 14, height: 14 }
                    span { "Contacts" }
                }
                button {
                    class: item_class("awards"),
                    onclick: move |_| on_navigate.call("awards".to_string()),
                    Icon { icon: FaAward, width: 14, height: 14 }
                    span { "Awards" }
                }
                button {
                    class: item_class("attendance"),
                    onclick: move |_| on_navigate.call("attendance".to_string()),
                    Icon { icon: FaCalendarDays, width: 14, height: 14 }
                    span { "Attendance" }
                }
            }

            // Bottom actions
            div {
                class: "sidebar-bottom",
                button {
                    class: item_class("profile"),
                    onclick: move |_| on_navigate.call("profile".to_string()),
                    Icon { icon: FaUser, width: 14, height: 14 }
                    span { "Profile" }
                }
                button {
                    class: item_class("settings"),
                    onclick: move |_| on_navigate.call("settings".to_string()),
                    Icon { icon: FaGear, width: 14, height: 14 }
                    span { "Settings" }
                }
                LogoutItem { on_logged_out: on_logged_out }
            }
        }
    }
}

#[component]
fn LogoutItem(on_logged_out: EventHandler<()>) -> Element {
    let session = use_session();

    let onclick = move |_| async move {
        let mut session = session;
        // Local cleanup happens regardless of the server call's outcome.
        session.logout().await;
        on_logged_out.call(());
    };

    rsx! {
        button {
            class: "sidebar-item",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "Log out" }
        }
    }
}
