//! Theme preference: system / light / dark.
//!
//! The preference persists across reloads; `None` means follow the OS. On the
//! web the resolved choice toggles a `dark` class on the document element,
//! which the stylesheets key off.

use dioxus::prelude::*;

use crate::prefs::make_prefs;

/// `None` = system, `Some("light")`, `Some("dark")`.
pub type ThemeSignal = Signal<Option<String>>;

/// Install the theme context at the app root.
pub fn provide_theme() -> ThemeSignal {
    use_context_provider(|| Signal::new(Option::<String>::None))
}

/// Load the saved preference and apply it. Call once on mount.
pub fn load_theme_from_storage(theme: &mut ThemeSignal) {
    let saved = make_prefs().theme();
    set_document_theme(saved.as_deref());
    theme.set(saved);
}

/// Persist and apply a theme choice.
pub fn apply_theme(theme: Option<&str>) {
    make_prefs().set_theme(theme);
    set_document_theme(theme);
}

#[cfg(target_arch = "wasm32")]
fn set_document_theme(theme: Option<&str>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return;
    };
    let dark = match theme {
        Some("dark") => true,
        Some(_) => false,
        None => window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false),
    };
    let classes = root.class_list();
    if dark {
        let _ = classes.add_1("dark");
    } else {
        let _ = classes.remove_1("dark");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_document_theme(_theme: Option<&str>) {}
