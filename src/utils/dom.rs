//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Document, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the page document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Replace the whole page body with a static error heading.
///
/// Used for fatal startup failures; the app is never mounted afterwards.
pub fn replace_body_with_error(message: &str) {
    if let Some(body) = document().and_then(|d| d.body()) {
        body.set_inner_html("");
        if let Some(document) = document()
            && let Ok(heading) = document.create_element("h1")
        {
            heading.set_text_content(Some(message));
            let _ = body.append_child(&heading);
        }
    }
}

/// Set the document title.
pub fn set_title(title: &str) {
    if let Some(document) = document() {
        document.set_title(title);
    }
}
