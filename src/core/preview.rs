//! File preview classification.
//!
//! Decides what the preview panel shows for a clicked file: an inline video
//! player for recognized video files, a "not supported" note otherwise.

use crate::models::{Entry, MediaType};
use crate::utils::{UrlValidation, validate_media_url};

/// What the preview panel plays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewMedia {
    /// `<video controls>` pointed at `src`
    Video { src: String },
    /// No inline preview for this file
    Unsupported,
}

/// Content of an open preview panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    /// Panel title (the file name)
    pub title: String,
    pub media: PreviewMedia,
}

impl Preview {
    /// Build the preview for a clicked entry.
    ///
    /// A video needs both a recognized extension and a usable download URL;
    /// anything short of that is unsupported.
    pub fn for_entry(entry: &Entry) -> Self {
        let media = match (entry.media_type(), entry.download_url.as_deref()) {
            (MediaType::Video, Some(url)) => match validate_media_url(url) {
                UrlValidation::Valid(src) => PreviewMedia::Video { src },
                UrlValidation::Invalid(_reason) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::warn_1(
                        &format!("Not previewing {}: {}", entry.name, _reason).into(),
                    );
                    PreviewMedia::Unsupported
                }
            },
            _ => PreviewMedia::Unsupported,
        };

        Self {
            title: entry.name.clone(),
            media,
        }
    }

    /// Source URL when the preview is playable.
    pub fn video_src(&self) -> Option<&str> {
        match &self.media {
            PreviewMedia::Video { src } => Some(src),
            PreviewMedia::Unsupported => None,
        }
    }
}
