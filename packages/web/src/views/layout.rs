use dioxus::prelude::*;

use ui::{use_session, DashboardSidebar, Spinner};

use crate::Route;

/// Shell around every dashboard view: sidebar plus the routed content.
///
/// Also the auth guard — once the session bootstrap finishes, a visitor
/// without a token is sent to the login page.
#[component]
pub fn DashboardLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();

    use_effect(move || {
        if !session.loading() && !session.is_authenticated() {
            nav.replace(Route::Login {});
        }
    });

    if session.loading() {
        return rsx! {
            Spinner {}
        };
    }

    let active = match route {
        Route::Products {} => "products",
        Route::Team {} => "team",
        Route::Technologies {} => "technologies",
        Route::Features {} => "features",
        Route::Testimonials {} => "testimonials",
        Route::Contacts {} => "contacts",
        Route::Awards {} => "awards",
        Route::Attendance {} => "attendance",
        Route::Profile {} => "profile",
        Route::Settings {} => "settings",
        _ => "overview",
    };

    let on_navigate = move |key: String| {
        let target = match key.as_str() {
            "products" => Route::Products {},
            "team" => Route::Team {},
            "technologies" => Route::Technologies {},
            "features" => Route::Features {},
            "testimonials" => Route::Testimonials {},
            "contacts" => Route::Contacts {},
            "awards" => Route::Awards {},
            "attendance" => Route::Attendance {},
            "profile" => Route::Profile {},
            "settings" => Route::Settings {},
            _ => Route::Overview {},
        };
        nav.push(target);
    };

    rsx! {
        div {
            class: "dashboard-layout",
            DashboardSidebar {
                active: active.to_string(),
                on_navigate: on_navigate,
                on_logged_out: move |_| {
                    nav.replace(Route::Login {});
                },
            }
            main {
                class: "dashboard-main",
                Outlet::<Route> {}
            }
        }
    }
}
