//! Configuration module for the kemono-archiver.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Platform endpoint bundles
//! - Configuration and profile URL validation

pub mod loader;
pub mod platform;
pub mod validation;

pub use loader::{Config, OptionsConfig};
pub use platform::{builtin_platforms, infer_platform, Platform};
pub use validation::{parse_profile_url, validate_config, validate_platform};
