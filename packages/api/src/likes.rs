use reqwest::RequestBuilder;
use store::Like;

use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_likes(&self, note_id: i64) -> Result<Vec<Like>, ApiError> {
        self.send_json(self.get(&format!("/api/likes/notes/{note_id}/likes/")))
            .await
    }

    pub(crate) fn like_note_request(&self, note_id: i64) -> RequestBuilder {
        self.post(&format!("/api/likes/notes/{note_id}/likes/"))
            .json(&serde_json::json!({}))
    }

    pub async fn like_note(&self, note_id: i64) -> Result<(), ApiError> {
        self.send_empty(self.like_note_request(note_id)).await
    }

    /// Remove a like by its own id, not the note id.
    pub async fn unlike(&self, like_id: i64) -> Result<(), ApiError> {
        self.send_empty(self.delete(&format!("/api/likes/{like_id}/"))).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use crate::test_support::{authed_client, body_json};

    #[test]
    fn test_like_note_posts_empty_object() {
        let request = authed_client().like_note_request(4).build().unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().path(), "/api/likes/notes/4/likes/");
        assert_eq!(body_json(&request), serde_json::json!({}));
    }
}
