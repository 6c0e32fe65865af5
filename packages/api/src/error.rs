//! Errors returned by every endpoint.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection refused).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// HTTP 401 or 403: missing, expired or insufficient token.
    #[error("not authenticated")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body did not match the expected DTO.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the stored session should be considered invalid.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub(crate) fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => ApiError::Status { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(ApiError::from_status(401, String::new()).is_auth_failure());
        assert!(ApiError::from_status(403, String::new()).is_auth_failure());
        assert!(matches!(ApiError::from_status(404, String::new()), ApiError::NotFound));

        let err = ApiError::from_status(400, r#"{"detail":"You cannot follow yourself."}"#.into());
        assert!(!err.is_auth_failure());
        assert_eq!(
            err.to_string(),
            r#"server returned 400: {"detail":"You cannot follow yourself."}"#
        );
    }
}
