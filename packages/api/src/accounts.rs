//! Account endpoints: login, registration and the token check.

use reqwest::RequestBuilder;
use store::{LoginRequest, LoginResponse, SessionUser, SignupRequest};

use crate::{ApiClient, ApiError};

impl ApiClient {
    pub(crate) fn login_request(&self, username: &str, password: &str) -> RequestBuilder {
        self.post("/api/accounts/login/").json(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Exchange credentials for a token.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        tracing::debug!(%username, "logging in");
        self.send_json(self.login_request(username, password)).await
    }

    pub(crate) fn register_request(&self, form: &SignupRequest) -> RequestBuilder {
        self.post("/api/accounts/register/").json(form)
    }

    /// Create an account. Does not log in.
    pub async fn register(&self, form: &SignupRequest) -> Result<(), ApiError> {
        self.send_empty(self.register_request(form)).await
    }

    pub(crate) fn current_user_request(&self) -> RequestBuilder {
        self.get("/api/accounts/me/")
    }

    /// Validate the stored token and fetch the account it belongs to.
    pub async fn current_user(&self) -> Result<SessionUser, ApiError> {
        self.send_json(self.current_user_request()).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use crate::test_support::{authed_client, body_json, BASE};

    use super::*;

    #[test]
    fn test_login_request() {
        let request = authed_client().login_request("amina", "s3cret").build().unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), format!("{BASE}/api/accounts/login/"));
        let body = body_json(&request);
        assert_eq!(body["username"], "amina");
        assert_eq!(body["password"], "s3cret");
    }

    #[test]
    fn test_register_request_sends_all_fields() {
        let form = SignupRequest {
            first_name: "Amina".into(),
            last_name: "Yusuf".into(),
            email: "amina@example.com".into(),
            username: "amina".into(),
            password: "s3cret".into(),
        };
        let request = authed_client().register_request(&form).build().unwrap();
        assert_eq!(request.url().path(), "/api/accounts/register/");
        let body = body_json(&request);
        assert_eq!(body["first_name"], "Amina");
        assert_eq!(body["email"], "amina@example.com");
        assert_eq!(body["password"], "s3cret");
    }

    #[test]
    fn test_current_user_request_is_authenticated() {
        let request = authed_client().current_user_request().build().unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().path(), "/api/accounts/me/");
        assert_eq!(request.headers()["authorization"], "Token tok");
    }
}
