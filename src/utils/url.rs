//! URL validation for media sources.
//!
//! Download URLs come straight from the listing response and end up in a
//! `<video src>`; only absolute http(s) URLs with a host are accepted.

/// Result of URL validation
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidation {
    /// URL is valid and safe to load
    Valid(String),
    /// URL is invalid or unsafe
    Invalid(UrlValidationError),
}

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidationError {
    /// URL is empty
    Empty,
    /// URL doesn't start with http:// or https://
    InvalidProtocol,
    /// URL has no host
    NoHost,
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL is empty"),
            Self::InvalidProtocol => write!(f, "URL must start with http:// or https://"),
            Self::NoHost => write!(f, "URL has no host"),
        }
    }
}

/// Validate a URL before using it as a media source
///
/// Checks:
/// 1. URL is not empty
/// 2. URL starts with http:// or https://
/// 3. URL has a non-empty host
pub fn validate_media_url(url: &str) -> UrlValidation {
    let url = url.trim();

    if url.is_empty() {
        return UrlValidation::Invalid(UrlValidationError::Empty);
    }

    let url_lower = url.to_lowercase();
    if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
        return UrlValidation::Invalid(UrlValidationError::InvalidProtocol);
    }

    if extract_host(url).is_none() {
        return UrlValidation::Invalid(UrlValidationError::NoHost);
    }

    UrlValidation::Valid(url.to_string())
}

/// Extract host from a URL
fn extract_host(url: &str) -> Option<String> {
    let (_, without_protocol) = url.split_once("://")?;

    // Host part ends at the first '/', '?' or '#'
    let host_part = without_protocol
        .split(['/', '?', '#'])
        .next()?;

    // Drop credentials and port
    let host_part = host_part.rsplit('@').next()?;
    let host = host_part.split(':').next()?;

    if host.is_empty() {
        return None;
    }

    Some(host.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert_eq!(
            validate_media_url("http://x/a.mp4"),
            UrlValidation::Valid("http://x/a.mp4".to_string())
        );
        assert!(matches!(
            validate_media_url("https://raw.githubusercontent.com/u/r/main/clip.mp4?token=1"),
            UrlValidation::Valid(_)
        ));
        assert!(matches!(
            validate_media_url("  HTTPS://Example.com/v.mp4 "),
            UrlValidation::Valid(_)
        ));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(matches!(
            validate_media_url(""),
            UrlValidation::Invalid(UrlValidationError::Empty)
        ));
        assert!(matches!(
            validate_media_url("javascript:alert(1)"),
            UrlValidation::Invalid(UrlValidationError::InvalidProtocol)
        ));
        assert!(matches!(
            validate_media_url("data:video/mp4;base64,AAAA"),
            UrlValidation::Invalid(UrlValidationError::InvalidProtocol)
        ));
        assert!(matches!(
            validate_media_url("https:///a.mp4"),
            UrlValidation::Invalid(UrlValidationError::NoHost)
        ));
    }

    #[test]
    fn test_rejection_reason_text() {
        let UrlValidation::Invalid(reason) = validate_media_url("ftp://host/a.mp4") else {
            panic!("ftp URL should be rejected");
        };
        assert_eq!(reason.to_string(), "URL must start with http:// or https://");
        assert_eq!(UrlValidationError::NoHost.to_string(), "URL has no host");
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(
            extract_host("https://raw.githubusercontent.com/user"),
            Some("raw.githubusercontent.com".to_string())
        );
        assert_eq!(
            extract_host("https://api.github.com:443/repos"),
            Some("api.github.com".to_string())
        );
        assert_eq!(
            extract_host("https://user:pw@Example.com/x"),
            Some("example.com".to_string())
        );
        assert_eq!(extract_host("https://"), None);
    }
}
