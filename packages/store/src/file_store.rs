//! # Filesystem-backed key store
//!
//! [`FileStore`] persists each preference as a single file under a base
//! directory, so native builds of the dashboard keep their session and
//! settings across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── auth_token
//! ├── auth_me_cache
//! ├── theme
//! └── api_base_url
//! ```
//!
//! Pass a platform-appropriate base obtained from [`dirs::data_dir()`], e.g.
//! `~/.local/share/devteam-admin/prefs/` on Linux.

use std::path::PathBuf;

use crate::prefs::KeyStore;

/// Filesystem-backed KeyStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("failed to create prefs dir: {err}");
            return;
        }
        if let Err(err) = std::fs::write(self.key_path(key), value) {
            tracing::warn!("failed to write pref {key}: {err}");
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}
