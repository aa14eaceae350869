//! # localStorage-backed key store — browser persistence
//!
//! [`WebStore`] is the [`KeyStore`] implementation used on the web platform.
//! All methods silently swallow storage failures (private-browsing modes,
//! quota errors): a broken localStorage degrades to "no saved state" rather
//! than crashing the app.

use crate::prefs::KeyStore;

/// Browser localStorage-backed KeyStore.
#[derive(Clone, Debug, Default)]
pub struct WebStore;

impl WebStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyStore for WebStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!("localStorage write failed for {key}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
