//! Service location.

use reqwest::Url;

use crate::ClientError;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Shown when a profile has no image.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// Validated base URL of the profile service.
///
/// Endpoint paths are appended verbatim, so a base URL with a path prefix
/// (`https://host/api`) keeps its prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string() }
    }
}

impl ClientConfig {
    /// Validate `base_url`. Must be an absolute `http` or `https` URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidBaseUrl { url: base_url.into(), reason };

        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", parsed.scheme())));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".into()));
        }

        Ok(Self { base_url: base_url.trim_end_matches('/').to_string() })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint path such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Absolute URL for a profile image reference.
    ///
    /// Server-relative paths are joined to the base URL, absolute URLs are
    /// kept, and a missing image resolves to [`PLACEHOLDER_IMAGE_URL`].
    pub fn resolve_image(&self, image: Option<&str>) -> String {
        match image.filter(|path| !path.is_empty()) {
            None => PLACEHOLDER_IMAGE_URL.to_string(),
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => url.into(),
            Some(path) if path.starts_with('/') => self.endpoint(path),
            Some(path) => format!("{}/{path}", self.base_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://10.0.2.2:8000/").unwrap();
        assert_eq!(config.endpoint("/auth/login"), "http://10.0.2.2:8000/auth/login");
    }

    #[test]
    fn path_prefix_is_kept() {
        let config = ClientConfig::new("https://example.com/api").unwrap();
        assert_eq!(config.endpoint("/profile/me"), "https://example.com/api/profile/me");
    }

    #[test]
    fn rejects_non_http() {
        assert!(matches!(
            ClientConfig::new("ftp://example.com"),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
        assert!(ClientConfig::new("example.com").is_err());
        assert!(ClientConfig::new("http://example.com/?x=1").is_err());
    }

    #[test]
    fn resolves_images() {
        let config = ClientConfig::new("http://host:8000").unwrap();

        assert_eq!(config.resolve_image(None), PLACEHOLDER_IMAGE_URL);
        assert_eq!(config.resolve_image(Some("")), PLACEHOLDER_IMAGE_URL);
        assert_eq!(config.resolve_image(Some("/uploads/1.jpg")), "http://host:8000/uploads/1.jpg");
        assert_eq!(config.resolve_image(Some("uploads/1.jpg")), "http://host:8000/uploads/1.jpg");
        assert_eq!(config.resolve_image(Some("https://cdn/x.png")), "https://cdn/x.png");
    }

    #[test]
    fn default_is_loopback() {
        assert_eq!(ClientConfig::default().base_url(), DEFAULT_BASE_URL);
    }
}
