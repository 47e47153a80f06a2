//! Listing API module.
//!
//! This module provides:
//! - HTTP client for the listing endpoint and media mirrors
//! - Post record types

pub mod client;
pub mod types;

pub use client::{ArchiveClient, PAGE_SIZE};
pub use types::*;
