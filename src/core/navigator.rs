//! Directory navigation state.
//!
//! - [`NavStack`] - visited directory paths; back pops one level
//! - [`RequestTokens`] - monotonically increasing listing request ids

// =============================================================================
// Navigation Stack
// =============================================================================

/// Stack of full directory paths entered since the root.
///
/// The root is the empty stack; the current directory is the top entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavStack {
    stack: Vec<String>,
}

impl NavStack {
    /// Empty stack, positioned at the repository root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current directory path (`""` at root).
    pub fn current(&self) -> &str {
        self.stack.last().map(String::as_str).unwrap_or("")
    }

    /// Whether a back step is possible.
    pub fn can_go_back(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Enter `path`.
    pub fn push(&mut self, path: impl Into<String>) {
        self.stack.push(path.into());
    }

    /// Leave the current directory.
    ///
    /// Returns the new current path, or `None` when already at the root.
    pub fn pop(&mut self) -> Option<&str> {
        self.stack.pop()?;
        Some(self.current())
    }
}

// =============================================================================
// Request Tokens
// =============================================================================

/// Identifier of one listing request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Issues request tokens and remembers the latest one.
#[derive(Clone, Debug, Default)]
pub struct RequestTokens {
    latest: u64,
}

impl RequestTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token, superseding all earlier ones.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Whether `token` is the most recently issued one.
    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_starts_at_root() {
        let nav = NavStack::new();
        assert_eq!(nav.current(), "");
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_multi_level_back() {
        let mut nav = NavStack::new();
        nav.push("sub");
        nav.push("sub/inner");
        nav.push("sub/inner/deep");
        assert_eq!(nav.current(), "sub/inner/deep");

        assert_eq!(nav.pop(), Some("sub/inner"));
        assert_eq!(nav.pop(), Some("sub"));
        assert!(nav.can_go_back());
        assert_eq!(nav.pop(), Some(""));
        assert!(!nav.can_go_back());
        assert_eq!(nav.pop(), None);
        assert_eq!(nav.current(), "");
    }

    #[test]
    fn test_tokens_supersede() {
        let mut tokens = RequestTokens::new();
        let first = tokens.issue();
        assert!(tokens.is_latest(first));

        let second = tokens.issue();
        assert!(second > first);
        assert!(!tokens.is_latest(first));
        assert!(tokens.is_latest(second));
    }
}
