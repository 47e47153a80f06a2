//! Kemono Archiver - post and media archiver for kemono/coomer style mirror sites.
//!
//! This library lists every post of a creator profile through the site's
//! listing API and stores each post in its own directory.
//!
//! # Features
//!
//! - Offset pagination over the post listing
//! - Post text saved as `content.html`
//! - Primary file and attachments fetched with fallback across ordered mirrors
//! - Existing post directories are skipped, so runs can be repeated
//! - Failed posts collected into a JSON file that can be replayed
//! - Platforms defined as data (listing base plus mirror lists)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use kemono_archiver::{
//!     config::parse_profile_url, download_all, list_all_posts, ArchiveClient, Config,
//!     DownloadContext, Pacer,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let profile = parse_profile_url("https://kemono.su/patreon/user/58531325")?;
//!     let (_, platform) = config.resolve_platform(Some("kemono"), None)?;
//!     let client = ArchiveClient::new(&config.options.user_agent, config.request_timeout())?;
//!
//!     let posts = list_all_posts(&client, &platform.listing_base, &profile, Pacer::none()).await?;
//!     let pacer = Pacer::new(config.download_interval(), config.jitter());
//!     let ctx = DownloadContext::new(&client, &platform, pacer);
//!     let report = download_all(
//!         &ctx,
//!         posts,
//!         Path::new("./downloads"),
//!         Path::new("./error.json"),
//!         true,
//!     )
//!     .await?;
//!     println!("{} of {} posts archived", report.succeeded(), report.total);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::{ArchiveClient, MediaRef, Post, ProfileRef};
pub use config::{Config, Platform};
pub use download::{
    download_all, download_via_mirrors, list_all_posts, materialize_post, BatchReport,
    DownloadContext, Pacer, PostOutcome,
};
pub use error::{Error, Result};
pub use media::{classify, MediaKind};
