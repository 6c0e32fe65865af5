use reqwest::RequestBuilder;
use store::FollowUser;

use crate::{ApiClient, ApiError};

impl ApiClient {
    pub(crate) fn follow_request(&self, username: &str) -> RequestBuilder {
        self.post(&format!("/api/follows/{username}/"))
    }

    pub async fn follow(&self, username: &str) -> Result<(), ApiError> {
        tracing::debug!(%username, "follow");
        self.send_empty(self.follow_request(username)).await
    }

    pub(crate) fn unfollow_request(&self, username: &str) -> RequestBuilder {
        self.delete(&format!("/api/follows/{username}/"))
    }

    pub async fn unfollow(&self, username: &str) -> Result<(), ApiError> {
        tracing::debug!(%username, "unfollow");
        self.send_empty(self.unfollow_request(username)).await
    }

    pub(crate) fn followers_request(&self, username: &str) -> RequestBuilder {
        self.get(&format!("/api/follows/{username}/followers/"))
    }

    pub async fn followers(&self, username: &str) -> Result<Vec<FollowUser>, ApiError> {
        self.send_json(self.followers_request(username)).await
    }

    pub(crate) fn following_request(&self, username: &str) -> RequestBuilder {
        self.get(&format!("/api/follows/{username}/following/"))
    }

    pub async fn following(&self, username: &str) -> Result<Vec<FollowUser>, ApiError> {
        self.send_json(self.following_request(username)).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use crate::test_support::authed_client;

    #[test]
    fn test_follow_and_unfollow_share_path() {
        let client = authed_client();
        let follow = client.follow_request("leo").build().unwrap();
        let unfollow = client.unfollow_request("leo").build().unwrap();
        assert_eq!(follow.method(), Method::POST);
        assert_eq!(unfollow.method(), Method::DELETE);
        assert_eq!(follow.url().path(), "/api/follows/leo/");
        assert_eq!(follow.url(), unfollow.url());
        assert!(follow.body().is_none());
    }

    #[test]
    fn test_list_paths() {
        let client = authed_client();
        assert_eq!(
            client.followers_request("amina.k").build().unwrap().url().path(),
            "/api/follows/amina.k/followers/"
        );
        assert_eq!(
            client.following_request("amina.k").build().unwrap().url().path(),
            "/api/follows/amina.k/following/"
        );
    }
}
