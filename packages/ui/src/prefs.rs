//! Shared preferences constructor for all platforms.
//!
//! Returns a [`store::Prefs`] backed by the appropriate [`store::KeyStore`]:
//! - **Web** (WASM + `web` feature): browser localStorage via [`store::WebStore`]
//! - **Native**: filesystem via [`store::FileStore`]
//! - **WASM without `web`** (e.g. tests): in-memory fallback

use store::{KeyStore, Prefs};

/// Create a platform-appropriate preferences store.
pub fn make_prefs() -> Prefs<impl KeyStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Prefs::new(store::WebStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("devteam-admin")
            .join("prefs");
        Prefs::new(store::FileStore::new(base))
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Prefs::new(store::MemoryStore::new())
    }
}
