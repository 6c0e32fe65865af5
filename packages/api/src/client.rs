//! # Shared HTTP client
//!
//! [`ApiClient`] wraps one `reqwest::Client` (cheap to clone, it is an `Arc`
//! inside) together with the backend base URL, the browser credential mode and
//! the optional session token. Endpoint modules add `impl ApiClient` blocks on
//! top of the four request builders and the two senders defined here.
//!
//! Every request carries `Authorization: Token <value>` when a token is set.
//! Responses are checked for status first ([`ApiError::from_status`]) and then
//! decoded from the body text, so a decode failure reports the serde error
//! instead of a generic transport error.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::TaskHiveConfig;

use crate::error::ApiError;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    /// Browser fetch credential mode `include`; native requests ignore it.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    with_credentials: bool,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &TaskHiveConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            with_credentials: config.api.with_credentials,
            token: None,
        }
    }

    /// A clone of this client that authenticates with `token`.
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
            ..self.clone()
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/tasks/`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            builder = builder.header(reqwest::header::AUTHORIZATION, format!("Token {token}"));
        }
        #[cfg(target_arch = "wasm32")]
        if self.with_credentials {
            builder = builder.fetch_credentials_include();
        }
        builder
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Send and decode a JSON body.
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        decode_json(response).await
    }

    /// Send and discard the body, only checking the status.
    pub async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await?;
        check_status(response).await.map(|_| ())
    }
}

/// Turn a non-2xx response into the matching [`ApiError`].
pub(crate) async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), %body, "request failed");
    Err(ApiError::from_status(status.as_u16(), body))
}

pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&TaskHiveConfig::default().with_api_url("https://api.taskhive.test/"))
    }

    fn response(status: u16, body: &str) -> Response {
        Response::from(
            http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = client();
        assert_eq!(client.base_url(), "https://api.taskhive.test");
        assert_eq!(client.url("/api/tasks/"), "https://api.taskhive.test/api/tasks/");
        assert_eq!(client.url("api/tags/"), "https://api.taskhive.test/api/tags/");
    }

    #[test]
    fn test_token_header() {
        let anonymous = client().get("/api/profiles/").build().unwrap();
        assert!(anonymous.headers().get("authorization").is_none());

        let authed = client()
            .with_token(Some("abc123".to_string()))
            .get("/api/profiles/")
            .build()
            .unwrap();
        assert_eq!(authed.headers()["authorization"], "Token abc123");
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let client = client().with_token(Some(String::new()));
        assert!(client.token().is_none());
    }

    #[tokio::test]
    async fn test_decode_success() {
        let tags: Vec<store::Tag> =
            decode_json(response(200, r#"[{"id": 1, "name": "maths"}]"#)).await.unwrap();
        assert_eq!(tags[0].name, "maths");
    }

    #[tokio::test]
    async fn test_decode_maps_status_before_body() {
        let err = decode_json::<Vec<store::Tag>>(response(401, r#"{"detail":"Invalid token."}"#))
            .await
            .unwrap_err();
        assert!(err.is_auth_failure());
    }

    #[tokio::test]
    async fn test_decode_reports_shape_mismatch() {
        let err = decode_json::<Vec<store::Tag>>(response(200, r#"{"results": []}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_check_status_keeps_body() {
        let err = check_status(response(500, "boom")).await.unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
