//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! There is no runtime configuration: everything the browser needs comes from
//! the page's query string (see [`crate::core::params`]).

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the repository hosting API.
pub const API_BASE_URL: &str = "https://api.github.com";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Query Parameters
// =============================================================================

/// Query parameter carrying the repository owner.
pub const USERNAME_PARAM: &str = "username";

/// Query parameter carrying the repository name.
pub const REPO_PARAM: &str = "repo";

// =============================================================================
// Preview Configuration
// =============================================================================

/// File extensions (lowercase, without the dot) played inline as video.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4"];

// =============================================================================
// User-facing Messages
// =============================================================================

/// Messages rendered verbatim into the page.
pub mod messages {
    /// Replaces the page body when `username` or `repo` is missing.
    pub const MISSING_PARAMS: &str =
        "Error: Please provide 'username' and 'repo' parameters in the URL.";

    /// Listing area text for an empty or non-array response.
    pub const EMPTY_LISTING: &str = "No files or directories found.";

    /// Listing area text for a network or decode failure.
    pub const FETCH_FAILED: &str =
        "Error fetching files. Please check the repository or try again later.";

    /// Preview text for files that cannot be played inline.
    pub const UNSUPPORTED_PREVIEW: &str = "File type not supported for preview.";

    /// Listing area text while a request is in flight.
    pub const LOADING: &str = "Loading...";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
