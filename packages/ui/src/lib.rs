//! This crate contains all shared UI for the workspace: routes, pages, the
//! session context and the modals used across pages. The `web` and `desktop`
//! crates only launch it.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod regular_icons {
    pub use dioxus_free_icons::icons::fa_regular_icons::*;
}
pub mod brand_icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

pub mod views;

pub const TASKHIVE_CSS: Asset = asset!("/assets/taskhive.css");

mod platform;
pub use platform::{load_config, session_store, PlatformStore};

mod auth;
pub use auth::{login, logout, signup, use_api, use_auth, use_config, AuthProvider, AuthState};

mod guard;
pub use guard::{guard, Access};

mod routes;
pub use routes::Route;

mod layout;
pub use layout::{AppLayout, RequireAuth};

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;

pub mod format;

mod likes_button;
pub use likes_button::LikesButton;

mod comments_modal;
pub use comments_modal::CommentsModal;

mod manage_tags_modal;
pub use manage_tags_modal::ManageTagsModal;

mod follow_modals;
pub use follow_modals::{FollowersModal, FollowingModal};
