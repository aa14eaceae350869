//! # API base URL resolution
//!
//! The REST API the dashboard talks to is configured in two layers:
//!
//! 1. A build-time default, overridable with the `ADMIN_API_BASE_URL`
//!    environment variable at compile time.
//! 2. A runtime override persisted from the settings page
//!    ([`Prefs::api_base_url`]), which always wins when present.
//!
//! Stored overrides are normalized on the way out: surrounding whitespace and
//! a trailing `/` are stripped so path joining never doubles slashes.

use crate::prefs::{KeyStore, Prefs};

/// Default API base URL when no override is stored.
pub fn default_api_base_url() -> &'static str {
    match option_env!("ADMIN_API_BASE_URL") {
        Some(url) => url,
        None => "http://localhost:5000/api/v1",
    }
}

/// Resolve the effective API base URL: stored override over build default.
pub fn resolve_api_base_url<S: KeyStore>(prefs: &Prefs<S>) -> String {
    match prefs.api_base_url() {
        Some(url) if !url.trim().is_empty() => normalize_base_url(&url),
        _ => default_api_base_url().to_string(),
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_default_when_no_override() {
        let prefs = Prefs::new(MemoryStore::new());
        assert_eq!(resolve_api_base_url(&prefs), default_api_base_url());
    }

    #[test]
    fn test_override_wins() {
        let prefs = Prefs::new(MemoryStore::new());
        prefs.set_api_base_url("https://api.example.com/api/v1");
        assert_eq!(
            resolve_api_base_url(&prefs),
            "https://api.example.com/api/v1"
        );
    }

    #[test]
    fn test_override_is_normalized() {
        let prefs = Prefs::new(MemoryStore::new());
        prefs.set_api_base_url("  https://api.example.com/api/v1/ ");
        assert_eq!(
            resolve_api_base_url(&prefs),
            "https://api.example.com/api/v1"
        );
    }

    #[test]
    fn test_blank_override_falls_back() {
        let prefs = Prefs::new(MemoryStore::new());
        prefs.set_api_base_url("   ");
        assert_eq!(resolve_api_base_url(&prefs), default_api_base_url());
    }
}
