//! # Browser `localStorage` session store
//!
//! [`LocalStore`] is the [`SessionStore`] used on the **web platform**. It is a
//! zero-size handle that looks up `window.localStorage` on every call; the
//! browser caches the storage object, and a missing or blocked storage (private
//! mode, sandboxed iframe) degrades to "not logged in" rather than a panic.

use crate::session::SessionStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, {key} not saved");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected {key}");
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
