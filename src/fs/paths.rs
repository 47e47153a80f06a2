//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::sanitize_filename;

/// Name of the file holding a post's title and body.
pub const CONTENT_FILE: &str = "content.html";

/// Directory a post is materialized into: `<output_root>/<post_id>`.
pub fn post_dir(output_root: &Path, post_id: &str) -> Result<PathBuf> {
    Ok(output_root.join(sanitize_filename(post_id)?))
}

/// Destination of a media file inside a post directory.
pub fn media_path(post_dir: &Path, media_name: &str) -> Result<PathBuf> {
    Ok(post_dir.join(sanitize_filename(media_name)?))
}

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}
