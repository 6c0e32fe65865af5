use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for tests and as a fallback when no persistent
/// storage is available.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_items() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set_item("authToken", "abc");
        assert_eq!(other.get_item("authToken").as_deref(), Some("abc"));

        other.remove_item("authToken");
        assert!(store.get_item("authToken").is_none());
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set_item("username", "a");
        store.set_item("username", "b");
        assert_eq!(store.get_item("username").as_deref(), Some("b"));
    }
}
