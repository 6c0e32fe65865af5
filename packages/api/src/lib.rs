//! # API crate: typed REST client for the TaskHive backend
//!
//! Every frontend talks to the backend through [`ApiClient`]. The client owns the
//! base URL and the session token; each endpoint module adds methods for one
//! backend resource and returns the DTOs defined in the `store` crate.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Shared `reqwest` client, auth header, status mapping and JSON decoding |
//! | [`error`] | [`ApiError`], the single error type of every call |
//! | [`accounts`] | Login, registration and the current-user check |
//! | [`tasks`] | Task CRUD with server-side search and filters |
//! | [`notes`] | Note CRUD and the network feed |
//! | [`tags`] | Tag CRUD |
//! | [`comments`] | Comments attached to a note |
//! | [`likes`] | Likes on a note |
//! | [`follows`] | Follow, unfollow and the follower/following lists |
//! | [`profiles`] | Profile lookup and the multipart profile update |
//!
//! Each endpoint is split into a `*_request` builder (pure, unit-tested) and an
//! `async fn` that sends it.

pub mod accounts;
pub mod client;
pub mod comments;
pub mod error;
pub mod follows;
pub mod likes;
pub mod notes;
pub mod profiles;
pub mod tags;
pub mod tasks;

pub use client::ApiClient;
pub use error::ApiError;
pub use profiles::ProfileUpdate;
pub use store::models;

#[cfg(test)]
pub(crate) mod test_support {
    use store::TaskHiveConfig;

    use crate::ApiClient;

    pub const BASE: &str = "https://api.taskhive.test";

    pub fn authed_client() -> ApiClient {
        ApiClient::new(&TaskHiveConfig::default().with_api_url(BASE))
            .with_token(Some("tok".to_string()))
    }

    pub fn body_json(request: &reqwest::Request) -> serde_json::Value {
        let bytes = request
            .body()
            .and_then(|b| b.as_bytes())
            .expect("request has a buffered body");
        serde_json::from_slice(bytes).expect("body is JSON")
    }
}
