//! Configuration structures and loading logic.

use crate::config::platform::{builtin_platforms, infer_platform, Platform};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,

    /// Platforms added or overridden by the user, keyed by name.
    #[serde(default)]
    pub platforms: BTreeMap<String, Platform>,
}

/// Run options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Root directory; each post gets a subdirectory named after its id.
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,

    /// Where the list of failed posts is written.
    #[serde(default = "default_error_file")]
    pub error_file: PathBuf,

    /// Milliseconds to wait between listing pages.
    #[serde(default = "default_interval_ms")]
    pub page_interval_ms: u64,

    /// Milliseconds to wait after each media download and each post.
    #[serde(default = "default_interval_ms")]
    pub download_interval_ms: u64,

    /// Upper bound of a random extra delay added to every pause.
    #[serde(default)]
    pub jitter_ms: u64,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Whether to draw the post progress bar.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            output_directory: default_output_directory(),
            error_file: default_error_file(),
            page_interval_ms: default_interval_ms(),
            download_interval_ms: default_interval_ms(),
            jitter_ms: 0,
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout(),
            show_progress: true,
        }
    }
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("./downloads")
}

fn default_error_file() -> PathBuf {
    PathBuf::from("./error.json")
}

fn default_interval_ms() -> u64 {
    100
}

fn default_user_agent() -> String {
    concat!("kemono-archiver/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_request_timeout() -> u64 {
    300
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Look up a platform by name; user-defined platforms shadow the built-ins.
    pub fn platform(&self, name: &str) -> Option<Platform> {
        self.all_platforms().remove(&name.to_lowercase())
    }

    /// All known platforms, built-ins first overridden by user entries.
    pub fn all_platforms(&self) -> BTreeMap<String, Platform> {
        let mut platforms = builtin_platforms();
        platforms.extend(
            self.platforms
                .iter()
                .map(|(name, platform)| (name.to_lowercase(), platform.clone())),
        );
        platforms
    }

    /// Choose the platform for a run: an explicit name wins, otherwise it is
    /// inferred from the profile URL host.
    pub fn resolve_platform(
        &self,
        explicit: Option<&str>,
        profile_url: Option<&str>,
    ) -> Result<(String, Platform)> {
        match (explicit, profile_url) {
            (Some(name), _) => self
                .platform(name)
                .map(|platform| (name.to_lowercase(), platform))
                .ok_or_else(|| Error::UnknownPlatform(name.to_string())),
            (None, Some(url)) => infer_platform(&self.all_platforms(), url),
            (None, None) => Err(Error::MissingConfig(
                "platform (pass --platform or a profile URL)".to_string(),
            )),
        }
    }

    pub fn page_interval(&self) -> Duration {
        Duration::from_millis(self.options.page_interval_ms)
    }

    pub fn download_interval(&self) -> Duration {
        Duration::from_millis(self.options.download_interval_ms)
    }

    pub fn jitter(&self) -> Duration {
        Duration::from_millis(self.options.jitter_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.options.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.options.output_directory, PathBuf::from("./downloads"));
        assert_eq!(config.options.error_file, PathBuf::from("./error.json"));
        assert_eq!(config.page_interval(), Duration::from_millis(100));
        assert_eq!(config.download_interval(), Duration::from_millis(100));
        assert!(config.platforms.is_empty());
        assert!(config.platform("kemono").is_some());
        assert!(config.platform("Coomer").is_some());
    }

    #[test]
    fn test_user_platform_overrides_builtin() {
        let config = Config::from_toml(
            r#"
            [options]
            output_directory = "/archive"
            download_interval_ms = 250

            [platforms.kemono]
            listing_base = "https://kemono.cr/api/v1"
            image_mirrors = ["https://img.kemono.cr/thumbnail/data"]
            file_mirrors = ["https://n1.kemono.cr/data", "https://n2.kemono.cr/data"]

            [platforms.mirror]
            listing_base = "https://mirror.example/api/v1"
            image_mirrors = ["https://mirror.example/data"]
            file_mirrors = ["https://mirror.example/data"]
            "#,
        )
        .unwrap();

        assert_eq!(config.options.output_directory, PathBuf::from("/archive"));
        assert_eq!(config.download_interval(), Duration::from_millis(250));
        assert_eq!(config.options.page_interval_ms, 100);

        let kemono = config.platform("kemono").unwrap();
        assert_eq!(kemono.listing_base, "https://kemono.cr/api/v1");
        assert_eq!(kemono.file_mirrors.len(), 2);

        let all = config.all_platforms();
        assert!(all.contains_key("coomer"));
        assert!(all.contains_key("mirror"));
        assert_eq!(all["kemono"].listing_base, "https://kemono.cr/api/v1");
    }

    #[test]
    fn test_unknown_platform() {
        assert!(Config::default().platform("patreon").is_none());
        assert!(matches!(
            Config::default().resolve_platform(Some("patreon"), None),
            Err(Error::UnknownPlatform(_))
        ));
    }

    #[test]
    fn test_resolve_platform() {
        let config = Config::default();

        let (name, _) = config
            .resolve_platform(Some("COOMER"), Some("https://kemono.su/patreon/user/1"))
            .unwrap();
        assert_eq!(name, "coomer");

        let (name, _) = config
            .resolve_platform(None, Some("https://kemono.su/patreon/user/1"))
            .unwrap();
        assert_eq!(name, "kemono");

        assert!(matches!(
            config.resolve_platform(None, None),
            Err(Error::MissingConfig(_))
        ));
    }
}
