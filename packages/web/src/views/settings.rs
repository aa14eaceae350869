use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleHalfStroke, FaCopy, FaMoon, FaSun};
use dioxus_free_icons::Icon;

use ui::{apply_theme, make_prefs, toast_error, toast_success, use_toasts, ThemeSignal};

#[component]
pub fn Settings() -> Element {
    let mut toasts = use_toasts();
    let mut api_url = use_signal(String::new);
    let mut saving = use_signal(|| false);

    // Load the effective URL on mount.
    use_effect(move || {
        let prefs = make_prefs();
        api_url.set(store::config::resolve_api_base_url(&prefs));
    });

    let handle_save = move |_| {
        if api_url().trim().is_empty() {
            toast_error(&mut toasts, "API URL cannot be empty");
            return;
        }
        saving.set(true);
        make_prefs().set_api_base_url(api_url().trim());
        toast_success(&mut toasts, "API URL saved");
        saving.set(false);
    };

    let handle_reset = move |_| {
        let prefs = make_prefs();
        prefs.clear_api_base_url();
        api_url.set(store::config::resolve_api_base_url(&prefs));
        toast_success(&mut toasts, "API URL reset to default");
    };

    let handle_copy = move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(&api_url());
            }
        }
        toast_success(&mut toasts, "Copied to clipboard");
    };

    rsx! {
        div {
            class: "view-page",

            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Settings" }
                    p { class: "page-subtitle", "Configure API and appearance" }
                }
            }

            div {
                class: "settings-grid",

                div {
                    class: "card",
                    h2 { class: "card-title", "API Configuration" }
                    p {
                        class: "cell-muted",
                        "Base URL for all API calls. Default: {store::config::default_api_base_url()}"
                    }

                    div {
                        class: "form-field",
                        label { r#for: "settings-api-url", "API Base URL" }
                        div {
                            class: "input-row",
                            input {
                                id: "settings-api-url",
                                r#type: "text",
                                placeholder: "http://localhost:5000/api/v1",
                                value: api_url(),
                                oninput: move |evt| api_url.set(evt.value()),
                            }
                            button {
                                class: "icon-button",
                                title: "Copy",
                                onclick: handle_copy,
                                Icon { icon: FaCopy, width: 14, height: 14 }
                            }
                        }
                    }

                    div {
                        class: "form-actions",
                        button {
                            class: "primary",
                            disabled: saving(),
                            onclick: handle_save,
                            if saving() { "Saving..." } else { "Save API URL" }
                        }
                        button {
                            class: "secondary",
                            onclick: handle_reset,
                            "Reset to default"
                        }
                    }
                }

                div {
                    class: "card",
                    h2 { class: "card-title", "Theme" }
                    ThemeSelector {}
                }
            }
        }
    }
}

#[component]
fn ThemeSelector() -> Element {
    let mut theme = use_context::<ThemeSignal>();

    let current = theme().unwrap_or_default();
    let is_system = current.is_empty();
    let is_light = current == "light";
    let is_dark = current == "dark";

    let radio_class = |active: bool| {
        if active {
            "theme-card theme-card-active"
        } else {
            "theme-card"
        }
    };

    rsx! {
        div {
            class: "theme-cards",
            label {
                class: radio_class(is_system),
                onclick: move |_| {
                    apply_theme(None);
                    theme.set(None);
                },
                Icon { icon: FaCircleHalfStroke, width: 14, height: 14 }
                span { "System" }
            }
            label {
                class: radio_class(is_light),
                onclick: move |_| {
                    apply_theme(Some("light"));
                    theme.set(Some("light".to_string()));
                },
                Icon { icon: FaSun, width: 14, height: 14 }
                span { "Light" }
            }
            label {
                class: radio_class(is_dark),
                onclick: move |_| {
                    apply_theme(Some("dark"));
                    theme.set(Some("dark".to_string()));
                },
                Icon { icon: FaMoon, width: 14, height: 14 }
                span { "Dark" }
            }
        }
        p {
            class: "cell-muted",
            "Choose how the dashboard appears. System follows your OS preference."
        }
    }
}
