//! Profile lookup and update.
//!
//! The update is a multipart form because it may carry an avatar file; the
//! backend accepts the same form without `image` to change only the bio.

use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use store::Profile;

use crate::{ApiClient, ApiError};

/// Fields of the profile edit form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileUpdate {
    pub bio: String,
    /// Selected avatar: file name and raw bytes.
    pub image: Option<(String, Vec<u8>)>,
}

impl ProfileUpdate {
    pub(crate) fn into_form(self) -> Form {
        let form = Form::new().text("bio", self.bio);
        match self.image {
            Some((file_name, bytes)) => form.part("image", Part::bytes(bytes).file_name(file_name)),
            None => form,
        }
    }
}

impl ApiClient {
    /// Every profile known to the backend, including the viewer's own.
    pub async fn list_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        self.send_json(self.get("/api/profiles/")).await
    }

    pub async fn my_profile(&self) -> Result<Profile, ApiError> {
        self.send_json(self.get("/api/profiles/me/")).await
    }

    pub(crate) fn profile_by_username_request(&self, username: &str) -> RequestBuilder {
        self.get(&format!("/api/profiles/username/{username}/"))
    }

    pub async fn profile_by_username(&self, username: &str) -> Result<Profile, ApiError> {
        self.send_json(self.profile_by_username_request(username)).await
    }

    pub(crate) fn update_my_profile_request(&self, update: ProfileUpdate) -> RequestBuilder {
        self.put("/api/profiles/me/").multipart(update.into_form())
    }

    pub async fn update_my_profile(&self, update: ProfileUpdate) -> Result<Profile, ApiError> {
        self.send_json(self.update_my_profile_request(update)).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use crate::test_support::authed_client;

    use super::*;

    #[test]
    fn test_profile_by_username_path() {
        let request = authed_client()
            .profile_by_username_request("leo_m")
            .build()
            .unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().path(), "/api/profiles/username/leo_m/");
    }

    #[test]
    fn test_update_is_multipart() {
        let update = ProfileUpdate {
            bio: "Second-year chemistry".into(),
            image: Some(("me.png".into(), vec![0x89, 0x50, 0x4e, 0x47])),
        };
        let request = authed_client()
            .update_my_profile_request(update)
            .build()
            .unwrap();
        assert_eq!(request.method(), Method::PUT);
        assert_eq!(request.url().path(), "/api/profiles/me/");
        let content_type = request.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
        assert_eq!(request.headers()["authorization"], "Token tok");
    }
}
