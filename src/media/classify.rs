//! File type classification by file name.

use std::fmt;

use crate::config::Platform;

/// Coarse media kind, deciding which mirror set serves a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Other,
    Unknown,
}

impl MediaKind {
    /// Mirror set for this kind, or `None` when the file cannot be routed.
    pub fn mirrors<'a>(&self, platform: &'a Platform) -> Option<&'a [String]> {
        match self {
            MediaKind::Image => Some(platform.image_mirrors.as_slice()),
            MediaKind::Other => Some(platform.file_mirrors.as_slice()),
            MediaKind::Unknown => None,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Other => write!(f, "other"),
            MediaKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classify a file by the MIME type guessed from its extension.
///
/// Only the name is inspected, never the bytes.
pub fn classify(file_name: &str) -> MediaKind {
    match mime_guess::from_path(file_name).first() {
        Some(mime) if mime.type_().as_str() == "image" => MediaKind::Image,
        Some(_) => MediaKind::Other,
        None => MediaKind::Unknown,
    }
}
