use reqwest::RequestBuilder;
use serde::Serialize;
use store::Comment;

use crate::{ApiClient, ApiError};

#[derive(Serialize)]
struct CommentPayload<'a> {
    content: &'a str,
}

impl ApiClient {
    pub async fn list_comments(&self, note_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.send_json(self.get(&format!("/api/notes/{note_id}/comments/")))
            .await
    }

    pub(crate) fn add_comment_request(&self, note_id: i64, content: &str) -> RequestBuilder {
        self.post(&format!("/api/notes/{note_id}/comments/"))
            .json(&CommentPayload { content })
    }

    pub async fn add_comment(&self, note_id: i64, content: &str) -> Result<(), ApiError> {
        self.send_empty(self.add_comment_request(note_id, content)).await
    }

    pub(crate) fn edit_comment_request(&self, id: i64, content: &str) -> RequestBuilder {
        self.put(&format!("/api/comments/{id}/"))
            .json(&CommentPayload { content })
    }

    pub async fn edit_comment(&self, id: i64, content: &str) -> Result<(), ApiError> {
        self.send_empty(self.edit_comment_request(id, content)).await
    }

    pub async fn delete_comment(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(self.delete(&format!("/api/comments/{id}/"))).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use crate::test_support::{authed_client, body_json};

    #[test]
    fn test_add_comment_is_nested_under_note() {
        let request = authed_client()
            .add_comment_request(9, "Great summary")
            .build()
            .unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().path(), "/api/notes/9/comments/");
        assert_eq!(body_json(&request)["content"], "Great summary");
    }

    #[test]
    fn test_edit_comment_uses_flat_path() {
        let request = authed_client()
            .edit_comment_request(41, "Edited")
            .build()
            .unwrap();
        assert_eq!(request.method(), Method::PUT);
        assert_eq!(request.url().path(), "/api/comments/41/");
    }
}
