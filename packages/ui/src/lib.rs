//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod prefs;
pub use prefs::make_prefs;

mod session;
pub use session::{use_session, Session, SessionProvider, SessionState};

mod toast;
pub use toast::{
    provide_toasts, push_toast, toast_error, toast_success, use_toasts, Toast, ToastHost,
    ToastLevel, ToastStack,
};

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, provide_theme, ThemeSignal};

mod hooks;
pub use hooks::{use_mutation, use_paginated_list, ListHandle, MutationHandle};

pub mod components;
pub use components::badge::StatusBadge;
pub use components::modal::{ConfirmDialog, ModalOverlay};
pub use components::page_header::PageHeader;
pub use components::pagination::PaginationControl;
pub use components::sidebar::DashboardSidebar;
pub use components::spinner::{Spinner, SpinnerInline};
pub use components::upload::{data_url_image, read_file_as_data_url, to_data_url};

pub const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");
pub const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");
