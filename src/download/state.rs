//! Per-post outcomes and batch statistics.

use crate::api::Post;
use crate::error::Result;

/// What materializing one post did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOutcome {
    /// The post directory already existed; nothing was touched.
    AlreadyPresent,
    /// The post directory was created and populated.
    Materialized {
        files_downloaded: u64,
        unknown_skipped: u64,
    },
}

/// Result of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub total: u64,
    pub materialized: u64,
    pub already_present: u64,
    pub files_downloaded: u64,
    pub unknown_skipped: u64,

    /// Posts that failed, as originally received, in listing order.
    pub failed: Vec<Post>,
}

impl BatchReport {
    /// Fold per-post results into a report.
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = (Post, Result<PostOutcome>)>,
    {
        outcomes
            .into_iter()
            .fold(Self::default(), |report, (post, outcome)| report.with(post, outcome))
    }

    fn with(mut self, post: Post, outcome: Result<PostOutcome>) -> Self {
        self.total += 1;
        match outcome {
            Ok(PostOutcome::AlreadyPresent) => self.already_present += 1,
            Ok(PostOutcome::Materialized {
                files_downloaded,
                unknown_skipped,
            }) => {
                self.materialized += 1;
                self.files_downloaded += files_downloaded;
                self.unknown_skipped += unknown_skipped;
            }
            Err(_) => self.failed.push(post),
        }
        self
    }

    /// Posts that are on disk after the run, whether new or already present.
    pub fn succeeded(&self) -> u64 {
        self.materialized + self.already_present
    }

    pub fn failed_count(&self) -> u64 {
        self.failed.len() as u64
    }
}
