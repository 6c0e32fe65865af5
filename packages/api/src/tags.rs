use reqwest::RequestBuilder;
use serde::Serialize;
use store::Tag;

use crate::{ApiClient, ApiError};

#[derive(Serialize)]
struct TagPayload<'a> {
    name: &'a str,
}

impl ApiClient {
    pub async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.send_json(self.get("/api/tags/")).await
    }

    pub(crate) fn create_tag_request(&self, name: &str) -> RequestBuilder {
        self.post("/api/tags/").json(&TagPayload { name })
    }

    pub async fn create_tag(&self, name: &str) -> Result<Tag, ApiError> {
        self.send_json(self.create_tag_request(name)).await
    }

    pub(crate) fn rename_tag_request(&self, id: i64, name: &str) -> RequestBuilder {
        self.put(&format!("/api/tags/{id}/")).json(&TagPayload { name })
    }

    pub async fn rename_tag(&self, id: i64, name: &str) -> Result<Tag, ApiError> {
        self.send_json(self.rename_tag_request(id, name)).await
    }

    pub async fn delete_tag(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(self.delete(&format!("/api/tags/{id}/"))).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use crate::test_support::{authed_client, body_json};

    #[test]
    fn test_tag_requests() {
        let client = authed_client();

        let create = client.create_tag_request("chemistry").build().unwrap();
        assert_eq!(create.method(), Method::POST);
        assert_eq!(create.url().path(), "/api/tags/");
        assert_eq!(body_json(&create), serde_json::json!({ "name": "chemistry" }));

        let rename = client.rename_tag_request(3, "organic").build().unwrap();
        assert_eq!(rename.method(), Method::PUT);
        assert_eq!(rename.url().path(), "/api/tags/3/");
        assert_eq!(body_json(&rename)["name"], "organic");
    }
}
