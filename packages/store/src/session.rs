//! # Persisted login session
//!
//! The token and user returned by login live in a small key/value store so the
//! session survives a reload. The keys match what the browser build writes to
//! `localStorage`:
//!
//! | Key | Value |
//! |-----|-------|
//! | `authToken` | The API token, sent as `Authorization: Token <value>` |
//! | `authUser` | JSON-encoded [`SessionUser`] |
//! | `username` | The bare username, kept for ownership checks |
//!
//! [`SessionStore`] is the seam between this module and the platform. Backends
//! live in sibling modules ([`crate::memory`], [`crate::file_store`],
//! [`crate::local`]) and never fail loudly: reads yield `None`, writes are best
//! effort.

use crate::models::{LoginResponse, SessionUser};

pub const TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "authUser";
pub const USERNAME_KEY: &str = "username";

/// String key/value storage for session data.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// An authenticated session: API token plus the account it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: SessionUser,
}

impl AuthSession {
    /// Build a session from a login response, falling back to the typed
    /// username when the server did not echo the user back.
    pub fn from_login(response: LoginResponse, typed_username: &str) -> Self {
        let user = response
            .user
            .unwrap_or_else(|| SessionUser::from_username(typed_username));
        Self {
            token: response.token,
            user,
        }
    }

    pub fn username(&self) -> &str {
        &self.user.username
    }

    /// Restore a session from storage.
    ///
    /// A token is required. The user comes from `authUser` when it parses, else
    /// from the bare `username` key.
    pub fn load(store: &impl SessionStore) -> Option<Self> {
        let token = store.get_item(TOKEN_KEY).filter(|t| !t.is_empty())?;

        let user = match store.get_item(USER_KEY) {
            Some(raw) => match serde_json::from_str::<SessionUser>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!("Discarding unreadable stored user: {e}");
                    None
                }
            },
            None => None,
        };

        let user = user.or_else(|| {
            store
                .get_item(USERNAME_KEY)
                .filter(|name| !name.is_empty())
                .map(SessionUser::from_username)
        })?;

        Some(Self { token, user })
    }

    /// Persist token, user and username.
    pub fn save(&self, store: &impl SessionStore) {
        store.set_item(TOKEN_KEY, &self.token);
        match serde_json::to_string(&self.user) {
            Ok(json) => store.set_item(USER_KEY, &json),
            Err(e) => tracing::warn!("Failed to encode session user: {e}"),
        }
        store.set_item(USERNAME_KEY, &self.user.username);
    }

    /// Remove every session key.
    pub fn clear(store: &impl SessionStore) {
        store.remove_item(TOKEN_KEY);
        store.remove_item(USER_KEY);
        store.remove_item(USERNAME_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn session() -> AuthSession {
        AuthSession {
            token: "tok-1".to_string(),
            user: SessionUser {
                id: Some(4),
                username: "amina".to_string(),
                first_name: "Amina".to_string(),
                last_name: "Rahman".to_string(),
                email: "amina@example.com".to_string(),
            },
        }
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        assert!(AuthSession::load(&store).is_none());

        session().save(&store);

        assert_eq!(store.get_item(TOKEN_KEY).as_deref(), Some("tok-1"));
        assert_eq!(store.get_item(USERNAME_KEY).as_deref(), Some("amina"));
        assert_eq!(AuthSession::load(&store), Some(session()));
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let store = MemoryStore::new();
        session().save(&store);

        AuthSession::clear(&store);

        assert!(store.get_item(TOKEN_KEY).is_none());
        assert!(store.get_item(USER_KEY).is_none());
        assert!(store.get_item(USERNAME_KEY).is_none());
        assert!(AuthSession::load(&store).is_none());
    }

    #[test]
    fn test_load_falls_back_to_username_key() {
        let store = MemoryStore::new();
        store.set_item(TOKEN_KEY, "tok-2");
        store.set_item(USER_KEY, "{not json");
        store.set_item(USERNAME_KEY, "leo");

        let loaded = AuthSession::load(&store).unwrap();
        assert_eq!(loaded.token, "tok-2");
        assert_eq!(loaded.username(), "leo");
        assert_eq!(loaded.user.id, None);
    }

    #[test]
    fn test_load_requires_token_and_user() {
        let store = MemoryStore::new();
        store.set_item(USERNAME_KEY, "leo");
        assert!(AuthSession::load(&store).is_none());

        store.set_item(TOKEN_KEY, "");
        assert!(AuthSession::load(&store).is_none());

        store.remove_item(USERNAME_KEY);
        store.set_item(TOKEN_KEY, "tok");
        assert!(AuthSession::load(&store).is_none());
    }

    #[test]
    fn test_from_login_uses_typed_username_when_user_missing() {
        let response = LoginResponse {
            token: "abc".to_string(),
            user: None,
        };
        let session = AuthSession::from_login(response, "sam");
        assert_eq!(session.username(), "sam");
        assert_eq!(session.token, "abc");
    }
}
