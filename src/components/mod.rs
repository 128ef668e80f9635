//! UI components built with Leptos.
//!
//! - [`browser`] - Repository browser (header, file list, preview panel)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;

pub use browser::RepoBrowser;
