//! Filesystem module.
//!
//! Provides:
//! - Path and directory management
//! - Filename validation
//! - Post list persistence

pub mod naming;
pub mod paths;
pub mod posts;

pub use naming::{partial_path, sanitize_filename};
pub use paths::{ensure_dir, media_path, post_dir, CONTENT_FILE};
pub use posts::{read_posts, write_posts};
