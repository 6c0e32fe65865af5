pub mod config;
pub mod filters;
pub mod media;
pub mod models;
pub mod session;
pub mod social;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::TaskHiveConfig;
pub use models::{
    Comment, FollowUser, Like, LoginRequest, LoginResponse, Note, NoteForm, Priority, Profile,
    SessionUser, SignupRequest, Tag, Task, TaskForm, TaskStatus,
};
pub use session::{AuthSession, SessionStore};
