//! # Filesystem-backed session store
//!
//! [`FileStore`] is the [`SessionStore`] used by the desktop build so a login
//! survives app restarts. Each key is a file under the base directory:
//!
//! ```text
//! <base_dir>/
//! ├── authToken
//! ├── authUser
//! └── username
//! ```
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/taskhive/` |
//! | Linux | `~/.local/share/taskhive/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\taskhive\` |

use std::path::PathBuf;

use crate::session::SessionStore;

/// Filesystem-backed SessionStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl SessionStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.item_path(key)).ok()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Cannot create session dir {}: {e}", self.base.display());
            return;
        }
        if let Err(e) = std::fs::write(self.item_path(key), value) {
            tracing::warn!("Cannot write session item {key}: {e}");
        }
    }

    fn remove_item(&self, key: &str) {
        let _ = std::fs::remove_file(self.item_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionUser;
    use crate::session::AuthSession;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("taskhive_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let session = AuthSession {
            token: "file-token".to_string(),
            user: SessionUser::from_username("amina"),
        };
        session.save(&FileStore::new(dir.clone()));

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(AuthSession::load(&reopened), Some(session));

        AuthSession::clear(&reopened);
        assert!(AuthSession::load(&FileStore::new(dir.clone())).is_none());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_item_is_none() {
        let store = FileStore::new(std::env::temp_dir().join("taskhive_test_missing"));
        assert!(store.get_item("nope").is_none());
        store.remove_item("nope");
    }
}
