//! Transient toast notifications.
//!
//! Every request error in the app surfaces here; nothing is retried and
//! nothing is fatal. Toasts auto-dismiss after a few seconds or on click.

use dioxus::prelude::*;
use std::time::Duration;

const DISMISS_AFTER: Duration = Duration::from_secs(4);

#[derive(Clone, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastStack {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

/// Install the toast context at the app root.
pub fn provide_toasts() -> Signal<ToastStack> {
    use_context_provider(|| Signal::new(ToastStack::default()))
}

pub fn use_toasts() -> Signal<ToastStack> {
    use_context::<Signal<ToastStack>>()
}

pub fn push_toast(toasts: &mut Signal<ToastStack>, level: ToastLevel, message: impl Into<String>) {
    let message = message.into();
    let id = {
        let mut stack = toasts.write();
        stack.next_id += 1;
        let id = stack.next_id;
        stack.toasts.push(Toast { id, level, message });
        id
    };

    let mut toasts = *toasts;
    spawn(async move {
        sleep(DISMISS_AFTER).await;
        toasts.write().toasts.retain(|t| t.id != id);
    });
}

pub fn toast_success(toasts: &mut Signal<ToastStack>, message: impl Into<String>) {
    push_toast(toasts, ToastLevel::Success, message);
}

pub fn toast_error(toasts: &mut Signal<ToastStack>, message: impl Into<String>) {
    push_toast(toasts, ToastLevel::Error, message);
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Renders the toast stack. Mount once, near the app root.
#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        document::Stylesheet { href: crate::TOAST_CSS }
        div {
            class: "toast-host",
            for toast in toasts().toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Info => "toast toast-info",
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    },
                    onclick: {
                        let id = toast.id;
                        move |_| toasts.write().toasts.retain(|t| t.id != id)
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
