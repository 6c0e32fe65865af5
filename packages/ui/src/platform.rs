//! Platform-specific constructors shared by every frontend.
//!
//! - **Web** (WASM + `web` feature): session in `localStorage` via [`store::LocalStore`],
//!   configuration from the build-time defaults.
//! - **Desktop** (native): session files under `<data_dir>/taskhive/session/` via
//!   [`store::FileStore`], configuration from `<config_dir>/taskhive/taskhive.toml`.

use store::TaskHiveConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// The session store for the current platform.
pub fn session_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("taskhive")
            .join("session");
        store::FileStore::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        shared_memory_store()
    }
}

/// One in-memory store per thread. Every handle shares the same map, so a
/// session saved at login is visible to later loads.
#[cfg(any(test, all(target_arch = "wasm32", not(feature = "web"))))]
fn shared_memory_store() -> store::MemoryStore {
    thread_local! {
        static MEMORY: store::MemoryStore = store::MemoryStore::new();
    }
    MEMORY.with(Clone::clone)
}

/// Load the client configuration for the current platform.
pub fn load_config() -> TaskHiveConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Some(path) = dirs::config_dir().map(|d| d.join("taskhive").join(TaskHiveConfig::filename())) {
            match std::fs::read_to_string(&path) {
                Ok(raw) => match TaskHiveConfig::from_toml(&raw) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {}", path.display());
                        return config.with_build_overrides();
                    }
                    Err(e) => tracing::warn!("Ignoring invalid {}: {e}", path.display()),
                },
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => tracing::warn!("Failed to read {}: {e}", path.display()),
            }
        }
    }
    TaskHiveConfig::default().with_build_overrides()
}

#[cfg(test)]
mod tests {
    use store::{AuthSession, SessionUser};

    use super::*;

    #[test]
    fn test_shared_memory_store_keeps_session_between_calls() {
        let session = AuthSession {
            token: "tok".to_string(),
            user: SessionUser::from_username("amina"),
        };
        session.save(&shared_memory_store());
        assert_eq!(AuthSession::load(&shared_memory_store()), Some(session));

        AuthSession::clear(&shared_memory_store());
        assert_eq!(AuthSession::load(&shared_memory_store()), None);
    }
}
