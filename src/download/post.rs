//! Materializing a single post to disk.

use std::path::Path;

use crate::api::{MediaRef, Post};
use crate::download::context::DownloadContext;
use crate::download::mirrors::download_via_mirrors;
use crate::download::state::PostOutcome;
use crate::error::{Error, Result};
use crate::fs::{ensure_dir, media_path, post_dir, CONTENT_FILE};
use crate::media::classify;

/// Persist a post's text and media under `<output_root>/<post id>`.
///
/// A post whose directory already exists is treated as done and left alone,
/// even if an earlier run stopped halfway through it. Any other failure stops
/// the post at that point and is returned as [`Error::Materialize`]; whatever
/// was already written stays on disk.
pub async fn materialize_post(
    ctx: &DownloadContext<'_>,
    post: &Post,
    output_root: &Path,
) -> Result<PostOutcome> {
    materialize(ctx, post, output_root)
        .await
        .map_err(|e| Error::materialize(&post.id, e))
}

async fn materialize(
    ctx: &DownloadContext<'_>,
    post: &Post,
    output_root: &Path,
) -> Result<PostOutcome> {
    ensure_dir(output_root).await?;

    let dir = post_dir(output_root, &post.id)?;
    match tokio::fs::create_dir(&dir).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            tracing::info!("Post {} already present at {}, skipping", post.id, dir.display());
            return Ok(PostOutcome::AlreadyPresent);
        }
        Err(e) => return Err(e.into()),
    }

    if !post.content.is_empty() {
        tracing::info!("Writing post text: {}", post.title);
        let text = format!("{}\n{}", post.title, post.content);
        tokio::fs::write(dir.join(CONTENT_FILE), text).await?;
    }

    let mut files_downloaded = 0;
    let mut unknown_skipped = 0;

    if let Some(file) = &post.file {
        tracing::info!("Downloading file: {}", file.name);
        if download_media(ctx, file, &dir).await? {
            files_downloaded += 1;
        } else {
            unknown_skipped += 1;
        }
        ctx.pacer.pause().await;
    }

    let total = post.attachments.len();
    if total > 0 {
        tracing::info!("Downloading {} attachment(s)", total);
    }

    for (index, attachment) in post.attachments.iter().enumerate() {
        if download_media(ctx, attachment, &dir).await? {
            files_downloaded += 1;
        } else {
            unknown_skipped += 1;
        }
        ctx.pacer.pause().await;
        tracing::info!("Attachment: {} | {}/{}", attachment.name, index + 1, total);
    }

    tracing::info!("Post {} done", post.id);

    Ok(PostOutcome::Materialized {
        files_downloaded,
        unknown_skipped,
    })
}

/// Download one media reference through the mirror set its type selects.
///
/// Returns `false` without touching the network when the type is unknown.
async fn download_media(ctx: &DownloadContext<'_>, media: &MediaRef, dir: &Path) -> Result<bool> {
    let kind = classify(&media.name);

    let Some(mirrors) = kind.mirrors(ctx.platform) else {
        tracing::warn!("Skipping {}: file type cannot be determined", media.name);
        return Ok(false);
    };

    let output_path = media_path(dir, &media.name)?;
    download_via_mirrors(ctx.client, mirrors, &media.path, &output_path).await?;

    Ok(true)
}
