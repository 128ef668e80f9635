//! Client-side name filter.
//!
//! Matches rendered rows by case-insensitive substring containment. Hidden
//! rows stay rendered; the filter never triggers a fetch.

/// Search term as typed, plus its lowercased needle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterTerm {
    input: String,
    needle: String,
}

impl FilterTerm {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            needle: input.to_lowercase(),
        }
    }

    /// Text as typed into the search field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Lowercased text rows are matched against.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether a row with visible text `row_text` stays shown.
    pub fn matches(&self, row_text: &str) -> bool {
        self.is_empty() || row_text.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_filter() {
        let term = FilterTerm::new("vid");
        assert!(term.matches("video.mp4"));
        assert!(!term.matches("notes.txt"));

        // Clearing the field restores every row
        let cleared = FilterTerm::new("");
        assert!(cleared.is_empty());
        assert!(cleared.matches("video.mp4"));
        assert!(cleared.matches("notes.txt"));
    }

    #[test]
    fn test_case_insensitive() {
        let term = FilterTerm::new("READ");
        assert_eq!(term.input(), "READ");
        assert_eq!(term.needle(), "read");
        assert!(term.matches("README.md"));
        assert!(term.matches("docs/readme"));
        assert!(!term.matches("LICENSE"));
    }

    #[test]
    fn test_whitespace_is_significant() {
        let term = FilterTerm::new(" ");
        assert!(term.matches("my notes.txt"));
        assert!(!term.matches("notes.txt"));
    }
}
