//! # Client configuration: `taskhive.toml`
//!
//! Where the REST backend lives and how media paths are resolved. The desktop
//! build reads the file from the platform config directory; the web build uses
//! the defaults. Both apply build-time overrides from `TASKHIVE_API_URL` and
//! `TASKHIVE_IMAGE_BASE_URL`.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//! with_credentials = true
//!
//! [media]
//! image_base_url = "https://res.cloudinary.com/dotdnopux/image/upload/"
//! ```
//!
//! Every section has `#[serde(default)]`, so a missing or partial file is
//! equivalent to the defaults.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://res.cloudinary.com/dotdnopux/image/upload/";

/// Top-level configuration stored in `taskhive.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskHiveConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub media: MediaConfig,
}

/// REST backend settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,
    /// Send cookies with cross-origin requests (browser fetch credential mode `include`).
    #[serde(default = "default_with_credentials")]
    pub with_credentials: bool,
}

/// Media settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Prefix for relative image paths returned by the backend.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_with_credentials() -> bool {
    true
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            with_credentials: default_with_credentials(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            image_base_url: default_image_base_url(),
        }
    }
}

impl TaskHiveConfig {
    /// Builder method to point at another backend.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    /// Builder method to change the media prefix.
    pub fn with_image_base_url(mut self, url: impl Into<String>) -> Self {
        self.media.image_base_url = url.into();
        self
    }

    /// Apply the build-time environment overrides, ignoring empty values.
    pub fn with_build_overrides(self) -> Self {
        self.with_overrides(
            option_env!("TASKHIVE_API_URL"),
            option_env!("TASKHIVE_IMAGE_BASE_URL"),
        )
    }

    fn with_overrides(mut self, api_url: Option<&str>, image_base_url: Option<&str>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self = self.with_api_url(url.trim());
        }
        if let Some(url) = image_base_url.filter(|u| !u.trim().is_empty()) {
            self = self.with_image_base_url(url.trim());
        }
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "taskhive.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = TaskHiveConfig::from_toml("").unwrap();
        assert_eq!(config, TaskHiveConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert!(config.api.with_credentials);
    }

    #[test]
    fn test_partial_section() {
        let config = TaskHiveConfig::from_toml(
            r#"
            [api]
            base_url = "https://taskhive.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://taskhive.example.com");
        assert!(config.api.with_credentials);
        assert_eq!(config.media.image_base_url, DEFAULT_IMAGE_BASE_URL);
    }

    #[test]
    fn test_to_toml_parses_back() {
        let config = TaskHiveConfig::default().with_api_url("http://10.0.0.2:8000");
        let text = config.to_toml().unwrap();
        assert!(text.contains("[api]"));
        assert_eq!(TaskHiveConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_overrides_skip_blank_values() {
        let config =
            TaskHiveConfig::default().with_overrides(Some("  "), Some("https://cdn.example/"));
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.media.image_base_url, "https://cdn.example/");
    }
}
