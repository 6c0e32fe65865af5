use reqwest::RequestBuilder;
use store::{Note, NoteForm};

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// The current user's own notes.
    pub async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        self.send_json(self.get("/api/notes/")).await
    }

    /// Public notes from the people the current user follows.
    pub async fn feed(&self) -> Result<Vec<Note>, ApiError> {
        self.send_json(self.get("/api/notes/feed/")).await
    }

    pub(crate) fn create_note_request(&self, form: &NoteForm) -> RequestBuilder {
        self.post("/api/notes/").json(form)
    }

    pub async fn create_note(&self, form: &NoteForm) -> Result<Note, ApiError> {
        self.send_json(self.create_note_request(form)).await
    }

    pub(crate) fn update_note_request(&self, id: i64, form: &NoteForm) -> RequestBuilder {
        self.put(&format!("/api/notes/{id}/")).json(form)
    }

    pub async fn update_note(&self, id: i64, form: &NoteForm) -> Result<Note, ApiError> {
        self.send_json(self.update_note_request(id, form)).await
    }

    pub async fn delete_note(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(self.delete(&format!("/api/notes/{id}/"))).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use crate::test_support::{authed_client, body_json};

    use super::*;

    #[test]
    fn test_create_note_sends_tags_by_name() {
        let form = NoteForm {
            title: "Photosynthesis".into(),
            content: "Light reactions".into(),
            is_public: true,
            tags: vec!["biology".into(), "exam".into()],
        };
        let request = authed_client().create_note_request(&form).build().unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().path(), "/api/notes/");
        let body = body_json(&request);
        assert_eq!(body["tags"], serde_json::json!(["biology", "exam"]));
        assert_eq!(body["is_public"], true);
    }

    #[test]
    fn test_update_note_targets_id() {
        let request = authed_client()
            .update_note_request(5, &NoteForm::default())
            .build()
            .unwrap();
        assert_eq!(request.method(), Method::PUT);
        assert_eq!(request.url().path(), "/api/notes/5/");
    }
}
