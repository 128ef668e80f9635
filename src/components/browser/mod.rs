//! Repository browser UI components.
//!
//! Components:
//! - [`RepoBrowser`] - Main browser view
//! - [`Header`] - Back button, location title and search bar
//! - [`FileList`] - Rows for the current listing
//! - [`PreviewPanel`] - File preview with inline video player

#[allow(clippy::module_inception)]
mod browser;
mod file_list;
mod header;
mod preview;

pub use browser::RepoBrowser;
pub use file_list::FileList;
pub use header::Header;
pub use preview::PreviewPanel;
