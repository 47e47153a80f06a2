//! HTTP client for the listing API and media mirrors.

use std::path::Path;
use std::time::Duration;

use futures::StreamExt;
use reqwest::{Client, Response, StatusCode};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::types::{Post, ProfileRef};
use crate::error::{Error, Result};

/// Number of posts the listing endpoint returns per page.
pub const PAGE_SIZE: u64 = 50;

/// Stateless client shared by the pagination walker and the mirror downloader.
///
/// Requests are never retried here; pacing and fallback belong to the callers.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    client: Client,
}

impl ArchiveClient {
    /// Create a new client.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetch one listing page of a creator's posts, starting at `offset`.
    pub async fn get_posts(
        &self,
        listing_base: &str,
        profile: &ProfileRef,
        offset: u64,
    ) -> Result<Vec<Post>> {
        let url = format!(
            "{}/{}/user/{}",
            listing_base.trim_end_matches('/'),
            profile.service,
            profile.user_id
        );

        tracing::debug!("GET {}?o={}", url, offset);

        let response = self
            .client
            .get(&url)
            .query(&[("o", offset)])
            .send()
            .await
            .map_err(|e| Error::Api(format!("Listing request failed: {}", e)))?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status != StatusCode::OK {
            return Err(Error::Api(format!(
                "Listing request for {} (offset {}) returned HTTP {}",
                url, offset, status
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Api(format!("Failed to read listing body: {}", e)))?;

        serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse listing: {} - Response: {}",
                e,
                text.chars().take(500).collect::<String>()
            ))
        })
    }

    /// Issue a GET for a media URL. Anything but `200 OK` is an error carrying the status.
    pub async fn fetch(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(Error::HttpStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    /// Stream a media URL into `output_path`, returning the number of bytes written.
    ///
    /// The body is written chunk by chunk and never buffered whole.
    pub async fn fetch_to_file(&self, url: &str, output_path: &Path) -> Result<u64> {
        let response = self.fetch(url).await?;

        let mut file = File::create(output_path).await?;
        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }

        file.flush().await?;

        Ok(written)
    }
}
