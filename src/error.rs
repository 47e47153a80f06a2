//! Error types for the kemono-archiver application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    #[error("Invalid profile URL: {0}")]
    InvalidProfileUrl(String),

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    // Listing errors
    #[error("API error: {0}")]
    Api(String),

    // Media download errors
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("All {attempts} mirror(s) failed for {path}")]
    AllMirrorsFailed { path: String, attempts: usize },

    #[error("Post {post_id} failed: {source}")]
    Materialize {
        post_id: String,
        #[source]
        source: Box<Error>,
    },

    // File system errors
    #[error("Invalid filename (path traversal attempt): {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Wrap an error as the failure of a single post.
    pub fn materialize(post_id: &str, source: Error) -> Self {
        Error::Materialize {
            post_id: post_id.to_string(),
            source: Box::new(source),
        }
    }

    /// Whether this error is specific to one mirror, so the next mirror should be tried.
    pub fn is_mirror_failure(&self) -> bool {
        matches!(self, Error::HttpStatus { .. } | Error::Network(_))
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
///
/// Failed posts never change the exit code; they are reported through the error file.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const UNEXPECTED_ERROR: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_failure_classification() {
        let status = Error::HttpStatus {
            status: 503,
            url: "https://n1.example/data/a.mp4".into(),
        };
        assert!(status.is_mirror_failure());

        let io = Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert!(!io.is_mirror_failure());

        let exhausted = Error::AllMirrorsFailed {
            path: "/a.mp4".into(),
            attempts: 3,
        };
        assert!(!exhausted.is_mirror_failure());
    }

    #[test]
    fn test_materialize_wraps_source() {
        let err = Error::materialize(
            "42",
            Error::AllMirrorsFailed {
                path: "/x/y.zip".into(),
                attempts: 4,
            },
        );
        assert_eq!(
            err.to_string(),
            "Post 42 failed: All 4 mirror(s) failed for /x/y.zip"
        );
    }
}
