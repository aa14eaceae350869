use api::UserUpdate;
use dioxus::prelude::*;

use ui::{toast_error, toast_success, use_mutation, use_session, use_toasts};

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut save = use_mutation();

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut change = use_mutation();

    // Seed the form once the session user is available.
    use_effect(move || {
        if let Some(user) = session.user() {
            name.set(user.name);
            email.set(user.email);
            phone.set(user.phone.unwrap_or_default());
        }
    });

    let handle_save = move |_| async move {
        if name().trim().is_empty() || email().trim().is_empty() {
            toast_error(&mut toasts, "Name and email are required");
            return;
        }
        let mut session = session;
        let update = UserUpdate {
            name: Some(name()),
            email: Some(email()),
            phone: Some(phone()),
            avatar: None,
        };
        match save.run(session.update_profile(&update)).await {
            Ok(_) => toast_success(&mut toasts, "Profile updated"),
            Err(err) => toast_error(&mut toasts, err.to_string()),
        }
    };

    let handle_password = move |_| async move {
        if current_password().is_empty() || new_password().is_empty() {
            toast_error(&mut toasts, "Both password fields are required");
            return;
        }
        let mut session = session;
        let current = current_password();
        let fresh = new_password();
        match change.run(session.update_password(&current, &fresh)).await {
            Ok(()) => {
                toast_success(&mut toasts, "Password updated");
                current_password.set(String::new());
                new_password.set(String::new());
            }
            Err(err) => toast_error(&mut toasts, err.to_string()),
        }
    };

    let user = session.user();

    rsx! {
        div {
            class: "view-page",

            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Profile" }
                    p { class: "page-subtitle", "Your account details" }
                }
            }

            div {
                class: "profile-grid",

                div {
                    class: "card",
                    h2 { class: "card-title", "Account" }

                    if let Some(ref user) = user {
                        div {
                            class: "profile-identity",
                            if let Some(ref avatar) = user.avatar {
                                if !avatar.url.is_empty() {
                                    img { class: "profile-avatar", src: "{avatar.url}", alt: "Avatar" }
                                }
                            }
                            div {
                                span { class: "profile-name", "{user.name}" }
                                span { class: "profile-role", "{user.role}" }
                            }
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "profile-name", "Name" }
                        input {
                            id: "profile-name",
                            r#type: "text",
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "profile-email", "Email" }
                        input {
                            id: "profile-email",
                            r#type: "email",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "profile-phone", "Phone" }
                        input {
                            id: "profile-phone",
                            r#type: "tel",
                            value: phone(),
                            oninput: move |evt| phone.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-actions",
                        button {
                            class: "primary",
                            disabled: save.loading(),
                            onclick: handle_save,
                            if save.loading() { "Saving..." } else { "Save changes" }
                        }
                    }
                }

                div {
                    class: "card",
                    h2 { class: "card-title", "Change password" }
                    p {
                        class: "cell-muted",
                        "You will stay signed in; the session continues with a fresh token."
                    }

                    div {
                        class: "form-field",
                        label { r#for: "profile-current-password", "Current password" }
                        input {
                            id: "profile-current-password",
                            r#type: "password",
                            value: current_password(),
                            oninput: move |evt| current_password.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "profile-new-password", "New password" }
                        input {
                            id: "profile-new-password",
                            r#type: "password",
                            value: new_password(),
                            oninput: move |evt| new_password.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-actions",
                        button {
                            class: "primary",
                            disabled: change.loading(),
                            onclick: handle_password,
                            if change.loading() { "Updating..." } else { "Update password" }
                        }
                    }
                }
            }
        }
    }
}
