//! Batch driver: materialize every post and record the failures.

use std::path::Path;

use crate::api::Post;
use crate::download::context::DownloadContext;
use crate::download::post::materialize_post;
use crate::download::state::{BatchReport, PostOutcome};
use crate::error::Result;
use crate::fs::write_posts;
use crate::output::create_item_bar;

/// Materialize all posts in order, isolating failures per post.
///
/// Failed posts are kept verbatim in [`BatchReport::failed`] and written to
/// `error_file` so a later run can replay exactly that subset. A run without
/// failures removes any error file left by an earlier run. Only writing the
/// error file can make this function fail.
pub async fn download_all(
    ctx: &DownloadContext<'_>,
    posts: Vec<Post>,
    output_root: &Path,
    error_file: &Path,
    show_progress: bool,
) -> Result<BatchReport> {
    let progress = create_item_bar(posts.len() as u64, "Posts", show_progress);
    let mut outcomes = Vec::with_capacity(posts.len());

    for post in posts {
        let outcome = materialize_post(ctx, &post, output_root).await;

        match &outcome {
            Ok(PostOutcome::AlreadyPresent) => {}
            Ok(PostOutcome::Materialized { .. }) => ctx.pacer.pause().await,
            Err(e) => {
                tracing::error!("{}", e);
                ctx.pacer.pause().await;
            }
        }

        progress.inc(1);
        outcomes.push((post, outcome));
    }

    progress.finish_and_clear();

    let report = BatchReport::from_outcomes(outcomes);

    if report.failed.is_empty() {
        if error_file.exists() {
            tracing::info!("No failures, removing stale {}", error_file.display());
            tokio::fs::remove_file(error_file).await?;
        }
    } else {
        write_posts(error_file, &report.failed).await?;
        tracing::warn!(
            "{} failed post(s) written to {}",
            report.failed_count(),
            error_file.display()
        );
    }

    tracing::info!(
        "Download finished | succeeded: {}/{}",
        report.succeeded(),
        report.total
    );

    Ok(report)
}
