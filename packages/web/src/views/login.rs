//! Login page with email/password form.

use dioxus::prelude::*;

use ui::{toast_error, toast_success, use_session, use_toasts};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Already logged in? Straight to the dashboard.
    use_effect(move || {
        if !session.loading() && session.is_authenticated() {
            nav.replace(Route::Overview {});
        }
    });

    let submit = move |email: String, password: String| {
        spawn(async move {
            let mut session = session;
            error.set(None);
            submitting.set(true);
            match session.login(&email, &password).await {
                Ok(()) => {
                    toast_success(&mut toasts, "Login successful");
                    nav.push(Route::Overview {});
                }
                Err(err) => {
                    let message = err.to_string();
                    error.set(Some(message.clone()));
                    toast_error(&mut toasts, format!("Login failed: {message}"));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "login-page",
            div {
                class: "login-card",

                div {
                    class: "login-brand",
                    span { class: "login-logo", "DT" }
                    h1 { "DevTeam Admin" }
                    p { "Sign in to manage the dashboard" }
                }

                if let Some(ref message) = error() {
                    div { class: "form-error", "{message}" }
                }

                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        submit(email(), password());
                    },

                    div {
                        class: "form-field",
                        label { r#for: "login-email", "Email" }
                        input {
                            id: "login-email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "login-password", "Password" }
                        input {
                            id: "login-password",
                            r#type: "password",
                            placeholder: "Your password",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    button {
                        class: "primary login-submit",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign in" }
                    }
                }

                button {
                    class: "secondary login-demo",
                    disabled: submitting(),
                    onclick: move |_| {
                        email.set("admin@example.com".to_string());
                        password.set("password123".to_string());
                        submit("admin@example.com".to_string(), "password123".to_string());
                    },
                    "Use demo credentials"
                }
            }
        }
    }
}
