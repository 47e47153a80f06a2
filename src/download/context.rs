//! Shared collaborators for downloading one platform's posts.

use crate::api::ArchiveClient;
use crate::config::Platform;
use crate::download::pacing::Pacer;

/// Everything the materializer needs besides the post itself.
#[derive(Debug, Clone, Copy)]
pub struct DownloadContext<'a> {
    pub client: &'a ArchiveClient,
    pub platform: &'a Platform,
    /// Pause after each media download and after each post.
    pub pacer: Pacer,
}

impl<'a> DownloadContext<'a> {
    pub fn new(client: &'a ArchiveClient, platform: &'a Platform, pacer: Pacer) -> Self {
        Self {
            client,
            platform,
            pacer,
        }
    }
}
