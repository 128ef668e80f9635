//! Page query parameter reader.
//!
//! The repository to browse is named by two query parameters,
//! `?username=<owner>&repo=<name>`. Both are required; a missing one is a
//! fatal precondition failure handled by `main`.

use crate::config::{REPO_PARAM, USERNAME_PARAM};
use crate::core::error::ParamError;

/// Repository coordinates read from the page URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoParams {
    /// Repository owner (user or organization)
    pub username: String,
    /// Repository name
    pub repo: String,
}

impl RepoParams {
    /// Parse `username` and `repo` from a query string.
    ///
    /// The leading `?` is optional. Values are percent-decoded and `+` is
    /// read as a space. When a key repeats, the first occurrence wins.
    // Parsed by hand rather than through `web_sys::UrlSearchParams` so it runs in host tests.
    pub fn from_query(query: &str) -> Result<Self, ParamError> {
        let mut username = None;
        let mut repo = None;

        for pair in query
            .trim_start_matches('?')
            .split('&')
            .filter(|part| !part.is_empty())
        {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match decode_component(key).as_str() {
                USERNAME_PARAM if username.is_none() => username = Some(decode_component(value)),
                REPO_PARAM if repo.is_none() => repo = Some(decode_component(value)),
                _ => {}
            }
        }

        let username = username
            .filter(|v| !v.is_empty())
            .ok_or(ParamError::MissingUsername)?;
        let repo = repo
            .filter(|v| !v.is_empty())
            .ok_or(ParamError::MissingRepo)?;

        Ok(Self { username, repo })
    }

    /// Read the parameters from `window.location.search`.
    pub fn from_location() -> Result<Self, ParamError> {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .ok_or(ParamError::NoLocation)?;
        Self::from_query(&search)
    }

    /// `owner/name` label used in the header and document title.
    pub fn display(&self) -> String {
        format!("{}/{}", self.username, self.repo)
    }
}

/// Decode one `application/x-www-form-urlencoded` component.
///
/// Malformed escapes are kept literally.
fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 2;
                    }
                    _ => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_params() {
        let params = RepoParams::from_query("?username=octocat&repo=hello-world").unwrap();
        assert_eq!(params.username, "octocat");
        assert_eq!(params.repo, "hello-world");
        assert_eq!(params.display(), "octocat/hello-world");

        // Order and leading '?' do not matter
        let params = RepoParams::from_query("repo=r&username=u").unwrap();
        assert_eq!(params, RepoParams {
            username: "u".to_string(),
            repo: "r".to_string(),
        });
    }

    #[test]
    fn test_missing_params_are_fatal() {
        assert_eq!(
            RepoParams::from_query("?username=octocat"),
            Err(ParamError::MissingRepo)
        );
        assert_eq!(
            RepoParams::from_query("?repo=hello-world"),
            Err(ParamError::MissingUsername)
        );
        assert_eq!(RepoParams::from_query(""), Err(ParamError::MissingUsername));
        assert_eq!(
            RepoParams::from_query("?username=&repo=x"),
            Err(ParamError::MissingUsername)
        );
        assert_eq!(
            RepoParams::from_query("?username=u&repo"),
            Err(ParamError::MissingRepo)
        );
    }

    #[test]
    fn test_first_occurrence_wins_and_extra_params_ignored() {
        let params =
            RepoParams::from_query("?username=a&theme=dark&username=b&repo=r&repo=s").unwrap();
        assert_eq!(params.username, "a");
        assert_eq!(params.repo, "r");
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("my%20repo"), "my repo");
        assert_eq!(decode_component("a+b"), "a b");
        assert_eq!(decode_component("caf%C3%A9"), "café");
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
    }
}
