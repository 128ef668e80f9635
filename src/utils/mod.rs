//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`GithubContents`], [`fetch_text`] - Network fetching with timeout
//! - [`validate_media_url`] - URL validation for media sources
//! - [`dom`] - Window/document helpers

pub mod dom;
mod fetch;
mod url;

pub use fetch::{FetchedText, GithubContents, RaceResult, fetch_text, race_with_timeout};
pub use url::{UrlValidation, UrlValidationError, validate_media_url};
