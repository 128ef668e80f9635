//! Repository contents entries as returned by the listing endpoint.

use serde::{Deserialize, Serialize};

use crate::config::VIDEO_EXTENSIONS;

// =============================================================================
// Entry
// =============================================================================

/// Kind of a listing entry (the JSON `type` field).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory
    Dir,
    /// Symlinks, submodules and anything else the API reports
    #[serde(other)]
    Other,
}

/// One file or directory record from a contents response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display name (last path segment)
    pub name: String,
    /// File, directory or other
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Repository-relative path, used to navigate into directories
    #[serde(default)]
    pub path: String,
    /// Raw download URL (files only; `null` for directories)
    #[serde(default)]
    pub download_url: Option<String>,
}

impl Entry {
    /// Returns true for directory entries.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Media type guessed from the entry name.
    pub fn media_type(&self) -> MediaType {
        if self.is_dir() {
            MediaType::Unknown
        } else {
            MediaType::from_name(&self.name)
        }
    }

    #[cfg(test)]
    pub fn file(name: &str, download_url: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            kind: EntryKind::File,
            path: name.to_string(),
            download_url: download_url.map(String::from),
        }
    }

    #[cfg(test)]
    pub fn dir(path: &str) -> Self {
        Self {
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            kind: EntryKind::Dir,
            path: path.to_string(),
            download_url: None,
        }
    }
}

// =============================================================================
// Media Type
// =============================================================================

/// Previewable media type, derived from the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaType {
    /// Played inline in a `<video>` element
    Video,
    /// Anything else
    Unknown,
}

impl MediaType {
    /// Detect media type from a file name.
    ///
    /// The extension is the lowercased text after the final `.`; a name
    /// without a dot is treated as its own extension.
    pub fn from_name(name: &str) -> Self {
        let ext = name.rsplit('.').next().map(|s| s.to_lowercase());
        match ext.as_deref() {
            Some(ext) if VIDEO_EXTENSIONS.contains(&ext) => Self::Video,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_detection() {
        assert_eq!(MediaType::from_name("a.mp4"), MediaType::Video);
        assert_eq!(MediaType::from_name("clips/Intro.MP4"), MediaType::Video);
        assert_eq!(MediaType::from_name("archive.mp4.zip"), MediaType::Unknown);
        assert_eq!(MediaType::from_name("readme.txt"), MediaType::Unknown);
        assert_eq!(MediaType::from_name("Makefile"), MediaType::Unknown);
    }

    #[test]
    fn test_deserialize_github_entries() {
        let json = r#"[
            {"name": "src", "path": "src", "type": "dir", "download_url": null, "sha": "abc"},
            {"name": "a.mp4", "path": "a.mp4", "type": "file", "download_url": "http://x/a.mp4", "size": 12},
            {"name": "vendor", "path": "vendor", "type": "submodule"}
        ]"#;
        let entries: Vec<Entry> = serde_json::from_str(json).unwrap();

        assert_eq!(entries[0].kind, EntryKind::Dir);
        assert!(entries[0].is_dir());
        assert_eq!(entries[0].download_url, None);
        assert_eq!(entries[1].kind, EntryKind::File);
        assert_eq!(entries[1].download_url.as_deref(), Some("http://x/a.mp4"));
        assert_eq!(entries[1].media_type(), MediaType::Video);
        assert_eq!(entries[2].kind, EntryKind::Other);
        assert_eq!(entries[2].download_url, None);
    }

    #[test]
    fn test_directories_are_never_media() {
        let dir = Entry::dir("clips/best.mp4");
        assert_eq!(dir.name, "best.mp4");
        assert_eq!(dir.media_type(), MediaType::Unknown);
    }
}
