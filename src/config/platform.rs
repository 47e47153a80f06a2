//! Platform definitions: listing endpoint plus ordered mirror sets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Endpoints of one mirror site.
///
/// Mirror lists are priority ordered; the first mirror to succeed wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Base of the listing API, e.g. `https://kemono.su/api/v1`.
    pub listing_base: String,

    /// Mirrors serving image files.
    pub image_mirrors: Vec<String>,

    /// Mirrors serving every other file type (video, archives, ...).
    pub file_mirrors: Vec<String>,
}

impl Platform {
    /// Build the standard layout used by the kemono and coomer sites.
    pub fn standard(host: &str, file_nodes: usize) -> Self {
        Self {
            listing_base: format!("https://{}/api/v1", host),
            image_mirrors: vec![format!("https://img.{}/thumbnail/data", host)],
            file_mirrors: (1..=file_nodes)
                .map(|n| format!("https://n{}.{}/data", n, host))
                .collect(),
        }
    }

    /// Host name of the listing endpoint.
    pub fn listing_host(&self) -> Option<String> {
        Url::parse(&self.listing_base)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }
}

/// Platforms known without any configuration.
pub fn builtin_platforms() -> BTreeMap<String, Platform> {
    let mut platforms = BTreeMap::new();
    platforms.insert("kemono".to_string(), Platform::standard("kemono.su", 4));
    platforms.insert("coomer".to_string(), Platform::standard("coomer.su", 4));
    platforms
}

/// Pick the platform a profile URL belongs to.
///
/// A platform matches when the URL host equals its listing host or contains its name.
pub fn infer_platform(
    platforms: &BTreeMap<String, Platform>,
    profile_url: &str,
) -> Result<(String, Platform)> {
    let url = Url::parse(profile_url)?;
    let host = url
        .host_str()
        .ok_or_else(|| Error::InvalidProfileUrl(profile_url.to_string()))?
        .trim_start_matches("www.")
        .to_lowercase();

    let by_host = platforms.iter().find(|(_, platform)| {
        platform
            .listing_host()
            .map(|h| h.trim_start_matches("www.") == host)
            .unwrap_or(false)
    });

    by_host
        .or_else(|| platforms.iter().find(|(name, _)| host.contains(name.as_str())))
        .map(|(name, platform)| (name.clone(), platform.clone()))
        .ok_or_else(|| Error::UnknownPlatform(format!("no platform matches host '{}'", host)))
}
