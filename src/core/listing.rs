//! Directory listings from the repository contents endpoint.
//!
//! Covers the transport-independent half of the fetcher: building the
//! request URL and decoding the response body. The browser transport lives in
//! [`crate::utils::fetch`].

use serde_json::Value;

use crate::config::API_BASE_URL;
use crate::core::error::FetchError;
use crate::core::params::RepoParams;
use crate::models::Entry;

// =============================================================================
// Endpoint
// =============================================================================

/// Contents endpoint of one repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentsEndpoint {
    base: String,
}

impl ContentsEndpoint {
    /// Endpoint on the configured API host.
    pub fn new(params: &RepoParams) -> Self {
        Self::with_api_base(API_BASE_URL, params)
    }

    /// Endpoint on an explicit API host (no trailing slash).
    pub fn with_api_base(api_base: &str, params: &RepoParams) -> Self {
        Self {
            base: format!(
                "{}/repos/{}/{}/contents/",
                api_base.trim_end_matches('/'),
                params.username,
                params.repo
            ),
        }
    }

    /// URL listing `path`; the path is appended verbatim (empty for root).
    pub fn contents_url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

// =============================================================================
// Listing
// =============================================================================

/// Decoded listing response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing {
    /// Non-empty array, in API order
    Entries(Vec<Entry>),
    /// Empty array or a non-array payload (e.g. an API error object)
    Empty,
}

/// Decode a contents response body.
///
/// Only a JSON array is treated as a listing. Anything else that is valid
/// JSON (the API answers `{"message": "Not Found", ...}` for unknown
/// repositories and rate limits) decodes as [`Listing::Empty`].
pub fn parse_listing(body: &str) -> Result<Listing, FetchError> {
    match serde_json::from_str::<Value>(body)? {
        Value::Array(items) if !items.is_empty() => {
            let entries = items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<Entry>, _>>()?;
            Ok(Listing::Entries(entries))
        }
        _ => Ok(Listing::Empty),
    }
}

/// Anything that can list a repository path.
///
/// Implemented by [`crate::utils::GithubContents`] in the browser and by
/// scripted sources in tests.
#[allow(async_fn_in_trait)]
pub trait ContentsSource {
    /// Fetch and decode the listing at `url`.
    async fn list(&self, url: &str) -> Result<Listing, FetchError>;
}

// =============================================================================
// Listing State
// =============================================================================

/// What the listing area currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListingState {
    /// Request in flight
    #[default]
    Loading,
    /// Rows to render
    Entries(Vec<Entry>),
    /// "No files or directories found."
    Empty,
    /// "Error fetching files."
    Failed,
}

impl From<Result<Listing, FetchError>> for ListingState {
    fn from(result: Result<Listing, FetchError>) -> Self {
        match result {
            Ok(Listing::Entries(entries)) => Self::Entries(entries),
            Ok(Listing::Empty) => Self::Empty,
            Err(_) => Self::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;

    fn params() -> RepoParams {
        RepoParams {
            username: "octocat".to_string(),
            repo: "hello".to_string(),
        }
    }

    #[test]
    fn test_contents_url() {
        let endpoint = ContentsEndpoint::new(&params());
        assert_eq!(
            endpoint.contents_url(""),
            "https://api.github.com/repos/octocat/hello/contents/"
        );
        assert_eq!(
            endpoint.contents_url("sub/inner"),
            "https://api.github.com/repos/octocat/hello/contents/sub/inner"
        );

        let local = ContentsEndpoint::with_api_base("http://localhost:8080/", &params());
        assert_eq!(
            local.contents_url("docs"),
            "http://localhost:8080/repos/octocat/hello/contents/docs"
        );
    }

    #[test]
    fn test_parse_listing_preserves_api_order() {
        let body = r#"[
            {"name": "zeta.mp4", "path": "zeta.mp4", "type": "file", "download_url": "http://x/zeta.mp4"},
            {"name": "alpha", "path": "alpha", "type": "dir", "download_url": null}
        ]"#;
        let Listing::Entries(entries) = parse_listing(body).unwrap() else {
            panic!("expected entries");
        };
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["zeta.mp4", "alpha"]);
        assert_eq!(entries[1].kind, EntryKind::Dir);
    }

    #[test]
    fn test_parse_listing_empty_and_error_shapes() {
        assert_eq!(parse_listing("[]").unwrap(), Listing::Empty);
        assert_eq!(
            parse_listing(r#"{"message": "Not Found", "status": "404"}"#).unwrap(),
            Listing::Empty
        );
        // Single-file paths return an object, not an array
        assert_eq!(
            parse_listing(r#"{"name": "a.mp4", "type": "file"}"#).unwrap(),
            Listing::Empty
        );
    }

    #[test]
    fn test_parse_listing_malformed() {
        assert!(matches!(
            parse_listing("<html>rate limited</html>"),
            Err(FetchError::JsonParse(_))
        ));
        // Array of the wrong shape
        assert!(matches!(
            parse_listing(r#"[{"title": "x"}]"#),
            Err(FetchError::JsonParse(_))
        ));
    }

    #[test]
    fn test_listing_state_from_result() {
        assert_eq!(ListingState::from(Ok(Listing::Empty)), ListingState::Empty);
        assert_eq!(
            ListingState::from(Err(FetchError::Timeout)),
            ListingState::Failed
        );
    }
}
