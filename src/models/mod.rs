//! Data models for the application.
//!
//! - [`Entry`], [`EntryKind`] - Records from the repository contents endpoint
//! - [`MediaType`] - Previewable media detection by file extension

mod entry;

pub use entry::{Entry, EntryKind, MediaType};
