//! # Prefs — typed client preferences on an abstract key store
//!
//! [`Prefs`] is the durable client-side state of the dashboard. Everything it
//! holds is a plain string under a well-known key, so the same logic works
//! against browser localStorage ([`crate::web`]), the filesystem
//! ([`crate::file_store`]), or an in-memory map ([`crate::memory`]).
//!
//! | Key | Contents |
//! |-----|----------|
//! | `auth_token` | Bearer token from the last successful login |
//! | `auth_me_cache` | JSON copy of the last profile fetch (304 fallback) |
//! | `theme` | `"light"` / `"dark"`; absent means follow the system |
//! | `api_base_url` | Base URL override set from the settings page |
//!
//! [`Prefs::clear_session`] removes the token and the cached profile but
//! leaves the theme and base URL override in place: logging out must not
//! reset how the app is configured.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const PROFILE_CACHE_KEY: &str = "auth_me_cache";
pub const THEME_KEY: &str = "theme";
pub const API_BASE_URL_KEY: &str = "api_base_url";

/// Synchronous string key/value storage.
///
/// Implementations must not panic on a broken backend; reads degrade to
/// `None` and writes become no-ops.
pub trait KeyStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Typed preferences backed by a KeyStore.
pub struct Prefs<S: KeyStore> {
    store: S,
}

impl<S: KeyStore> Prefs<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn auth_token(&self) -> Option<String> {
        self.store.get(AUTH_TOKEN_KEY)
    }

    pub fn set_auth_token(&self, token: &str) {
        self.store.set(AUTH_TOKEN_KEY, token);
    }

    pub fn clear_auth_token(&self) {
        self.store.remove(AUTH_TOKEN_KEY);
    }

    /// Last successfully fetched profile, if any.
    ///
    /// A cache entry that no longer parses is treated as absent rather than
    /// surfaced as an error.
    pub fn cached_profile<T: DeserializeOwned>(&self) -> Option<T> {
        let raw = self.store.get(PROFILE_CACHE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(err) => {
                tracing::warn!("discarding unreadable profile cache: {err}");
                None
            }
        }
    }

    pub fn set_cached_profile<T: Serialize>(&self, profile: &T) {
        match serde_json::to_string(profile) {
            Ok(raw) => self.store.set(PROFILE_CACHE_KEY, &raw),
            Err(err) => tracing::warn!("failed to serialize profile cache: {err}"),
        }
    }

    pub fn clear_cached_profile(&self) {
        self.store.remove(PROFILE_CACHE_KEY);
    }

    /// Theme preference. `None` means follow the system.
    pub fn theme(&self) -> Option<String> {
        self.store.get(THEME_KEY)
    }

    pub fn set_theme(&self, theme: Option<&str>) {
        match theme {
            Some(theme) => self.store.set(THEME_KEY, theme),
            None => self.store.remove(THEME_KEY),
        }
    }

    pub fn api_base_url(&self) -> Option<String> {
        self.store.get(API_BASE_URL_KEY)
    }

    pub fn set_api_base_url(&self, url: &str) {
        self.store.set(API_BASE_URL_KEY, url);
    }

    pub fn clear_api_base_url(&self) {
        self.store.remove(API_BASE_URL_KEY);
    }

    /// Remove everything tied to the authenticated session.
    pub fn clear_session(&self) {
        self.clear_auth_token();
        self.clear_cached_profile();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct FakeProfile {
        name: String,
        email: String,
    }

    #[test]
    fn test_token_lifecycle() {
        let prefs = Prefs::new(MemoryStore::new());

        assert!(prefs.auth_token().is_none());

        prefs.set_auth_token("abc");
        assert_eq!(prefs.auth_token().as_deref(), Some("abc"));

        prefs.clear_auth_token();
        assert!(prefs.auth_token().is_none());
    }

    #[test]
    fn test_profile_cache_roundtrip() {
        let prefs = Prefs::new(MemoryStore::new());

        assert!(prefs.cached_profile::<FakeProfile>().is_none());

        let profile = FakeProfile {
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
        };
        prefs.set_cached_profile(&profile);

        let loaded: FakeProfile = prefs.cached_profile().unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_corrupt_profile_cache_reads_as_none() {
        let store = MemoryStore::new();
        store.set(PROFILE_CACHE_KEY, "{not json");

        let prefs = Prefs::new(store);
        assert!(prefs.cached_profile::<FakeProfile>().is_none());
    }

    #[test]
    fn test_clear_session_keeps_configuration() {
        let prefs = Prefs::new(MemoryStore::new());

        prefs.set_auth_token("abc");
        prefs.set_cached_profile(&FakeProfile {
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
        });
        prefs.set_theme(Some("dark"));
        prefs.set_api_base_url("https://api.example.com/api/v1");

        prefs.clear_session();

        assert!(prefs.auth_token().is_none());
        assert!(prefs.cached_profile::<FakeProfile>().is_none());
        assert_eq!(prefs.theme().as_deref(), Some("dark"));
        assert_eq!(
            prefs.api_base_url().as_deref(),
            Some("https://api.example.com/api/v1")
        );
    }

    #[test]
    fn test_theme_none_clears() {
        let prefs = Prefs::new(MemoryStore::new());

        prefs.set_theme(Some("light"));
        assert_eq!(prefs.theme().as_deref(), Some("light"));

        prefs.set_theme(None);
        assert!(prefs.theme().is_none());
    }
}
