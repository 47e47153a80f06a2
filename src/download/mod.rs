//! Download module for archiving posts.
//!
//! This module provides:
//! - Request pacing
//! - Mirror-fallback media downloading
//! - Per-post materialization
//! - Listing pagination
//! - The batch driver and its report

pub mod batch;
pub mod context;
pub mod listing;
pub mod mirrors;
pub mod pacing;
pub mod post;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use batch::download_all;
pub use context::DownloadContext;
pub use listing::list_all_posts;
pub use mirrors::{download_via_mirrors, mirror_url};
pub use pacing::Pacer;
pub use post::materialize_post;
pub use state::{BatchReport, PostOutcome};
