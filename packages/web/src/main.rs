use dioxus::prelude::*;

use ui::{load_theme_from_storage, provide_theme, provide_toasts, SessionProvider, ToastHost};
use views::{
    Attendance, Awards, Contacts, DashboardLayout, Features, Login, Overview, Products, Profile,
    Settings, Team, Technologies, Testimonials,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(DashboardLayout)]
        #[route("/dashboard")]
        Overview {},
        #[route("/dashboard/products")]
        Products {},
        #[route("/dashboard/team")]
        Team {},
        #[route("/dashboard/technologies")]
        Technologies {},
        #[route("/dashboard/features")]
        Features {},
        #[route("/dashboard/testimonials")]
        Testimonials {},
        #[route("/dashboard/contacts")]
        Contacts {},
        #[route("/dashboard/awards")]
        Awards {},
        #[route("/dashboard/attendance")]
        Attendance {},
        #[route("/dashboard/profile")]
        Profile {},
        #[route("/dashboard/settings")]
        Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut theme = provide_theme();
    provide_toasts();

    // Apply the saved theme once on mount.
    use_effect(move || {
        load_theme_from_storage(&mut theme);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            ToastHost {}
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the dashboard; the layout guard bounces unauthenticated
/// visitors on to `/login`.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Overview {});
    rsx! {}
}
