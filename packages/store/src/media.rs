//! Image URL resolution for profile pictures.

pub const PLACEHOLDER_AVATAR: &str = "https://ui-avatars.com/api/?name=User";

const UPLOAD_PREFIX: &str = "image/upload/";

/// Resolve a backend image field to a URL the browser can load.
///
/// Absolute URLs pass through. Relative storage paths have any leading
/// `image/upload/` stripped and are joined onto `base`. A missing or blank
/// path yields the placeholder avatar.
pub fn image_url(path: Option<&str>, base: &str) -> String {
    let Some(path) = path.map(str::trim).filter(|p| !p.is_empty()) else {
        return PLACEHOLDER_AVATAR.to_string();
    };
    if path.starts_with("http") {
        return path.to_string();
    }
    let relative = path.strip_prefix(UPLOAD_PREFIX).unwrap_or(path);
    if base.ends_with('/') {
        format!("{base}{relative}")
    } else {
        format!("{base}/{relative}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://res.cloudinary.com/demo/image/upload/";

    #[test]
    fn test_absolute_url_passes_through() {
        assert_eq!(
            image_url(Some("https://cdn.example.com/a.png"), BASE),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_relative_path_strips_upload_prefix() {
        assert_eq!(
            image_url(Some("image/upload/v1/leo.png"), BASE),
            "https://res.cloudinary.com/demo/image/upload/v1/leo.png"
        );
        assert_eq!(
            image_url(Some("v1/leo.png"), "https://cdn.example"),
            "https://cdn.example/v1/leo.png"
        );
    }

    #[test]
    fn test_missing_image_is_placeholder() {
        assert_eq!(image_url(None, BASE), PLACEHOLDER_AVATAR);
        assert_eq!(image_url(Some(" "), BASE), PLACEHOLDER_AVATAR);
    }
}
