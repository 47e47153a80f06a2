//! Media module for file classification.

pub mod classify;

pub use classify::{classify, MediaKind};
