//! Reading and writing post lists as JSON files.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::fs;

use crate::api::Post;
use crate::error::{Error, Result};

/// Write posts as a pretty-printed JSON array (4-space indent), replacing any existing file.
pub async fn write_posts(path: &Path, posts: &[Post]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    posts.serialize(&mut serializer)?;

    fs::write(path, buf).await?;
    Ok(())
}

/// Read a JSON array of posts, e.g. a previous error file.
pub async fn read_posts(path: &Path) -> Result<Vec<Post>> {
    let content = fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::Config(format!("Post list not found: {}", path.display()))
        } else {
            Error::Io(e)
        }
    })?;

    Ok(serde_json::from_str(&content)?)
}
