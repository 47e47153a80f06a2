//! Download with fallback across an ordered list of mirrors.

use std::path::Path;

use crate::api::ArchiveClient;
use crate::error::{Error, Result};
use crate::fs::partial_path;

/// Join a mirror base URL and a server-relative path.
pub fn mirror_url(base: &str, relative_path: &str) -> String {
    let base = base.trim_end_matches('/');
    if relative_path.starts_with('/') {
        format!("{}{}", base, relative_path)
    } else {
        format!("{}/{}", base, relative_path)
    }
}

/// Download `relative_path` into `output_path`, trying each mirror in order.
///
/// Each mirror is contacted at most once and none after the first success.
/// The body is streamed into a `.part` file that is renamed on success and
/// removed on failure, so nothing is left at `output_path` unless a mirror
/// delivered the whole file. Returns the URL that succeeded.
pub async fn download_via_mirrors(
    client: &ArchiveClient,
    mirrors: &[String],
    relative_path: &str,
    output_path: &Path,
) -> Result<String> {
    let partial = partial_path(output_path);

    for (index, base) in mirrors.iter().enumerate() {
        let url = mirror_url(base, relative_path);

        match client.fetch_to_file(&url, &partial).await {
            Ok(bytes) => {
                if let Err(e) = tokio::fs::rename(&partial, output_path).await {
                    let _ = tokio::fs::remove_file(&partial).await;
                    return Err(e.into());
                }
                tracing::debug!("Downloaded {} ({} bytes)", url, bytes);
                return Ok(url);
            }
            Err(e) => {
                let _ = tokio::fs::remove_file(&partial).await;

                if !e.is_mirror_failure() {
                    return Err(e);
                }

                tracing::warn!("Mirror {}/{} failed: {}", index + 1, mirrors.len(), e);
            }
        }
    }

    Err(Error::AllMirrorsFailed {
        path: relative_path.to_string(),
        attempts: mirrors.len(),
    })
}
