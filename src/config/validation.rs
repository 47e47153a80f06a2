//! Configuration validation logic.

use crate::api::ProfileRef;
use crate::config::loader::Config;
use crate::config::platform::Platform;
use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// Longest pause accepted for any interval option, in milliseconds.
const MAX_INTERVAL_MS: u64 = 60_000;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    let options = &config.options;

    if options.output_directory.as_os_str().is_empty() {
        return Err(Error::MissingConfig("output_directory".to_string()));
    }

    if options.error_file.as_os_str().is_empty() {
        return Err(Error::MissingConfig("error_file".to_string()));
    }

    validate_interval("page_interval_ms", options.page_interval_ms)?;
    validate_interval("download_interval_ms", options.download_interval_ms)?;
    validate_interval("jitter_ms", options.jitter_ms)?;

    if options.request_timeout_secs == 0 {
        return Err(Error::ConfigValidation {
            field: "request_timeout_secs".to_string(),
            message: "Timeout must be at least 1 second".to_string(),
        });
    }

    for (name, platform) in &config.platforms {
        validate_platform(name, platform)?;
    }

    Ok(())
}

fn validate_interval(field: &str, value_ms: u64) -> Result<()> {
    if value_ms > MAX_INTERVAL_MS {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!(
                "Interval must be at most {} ms (got {})",
                MAX_INTERVAL_MS, value_ms
            ),
        });
    }
    Ok(())
}

/// Validate one platform bundle.
pub fn validate_platform(name: &str, platform: &Platform) -> Result<()> {
    let field = format!("platforms.{}", name);

    validate_http_url(&field, "listing_base", &platform.listing_base)?;

    if platform.image_mirrors.is_empty() {
        return Err(Error::ConfigValidation {
            field,
            message: "At least one image mirror is required".to_string(),
        });
    }

    if platform.file_mirrors.is_empty() {
        return Err(Error::ConfigValidation {
            field,
            message: "At least one file mirror is required".to_string(),
        });
    }

    for mirror in platform.image_mirrors.iter().chain(&platform.file_mirrors) {
        validate_http_url(&field, "mirror", mirror)?;
    }

    Ok(())
}

fn validate_http_url(field: &str, what: &str, value: &str) -> Result<()> {
    let valid = Url::parse(value)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false);

    if !valid {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("Invalid {} URL: '{}'", what, value),
        });
    }

    Ok(())
}

/// Extract the service and user id from a profile URL.
///
/// Expects `https://<host>/<service>/user/<user_id>`; empty path segments are ignored.
pub fn parse_profile_url(input: &str) -> Result<ProfileRef> {
    let input = input.trim();
    let url = Url::parse(input).map_err(|_| Error::InvalidProfileUrl(input.to_string()))?;

    let segments: Vec<&str> = url
        .path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.len() < 3 || segments[1] != "user" {
        return Err(Error::InvalidProfileUrl(format!(
            "expected <host>/<service>/user/<id>, got '{}'",
            input
        )));
    }

    let segment_pattern = Regex::new(r"^[A-Za-z0-9_.-]+$").unwrap();
    let (service, user_id) = (segments[0], segments[2]);

    for (field, value) in [("service", service), ("user id", user_id)] {
        if !segment_pattern.is_match(value) || value.contains("..") {
            return Err(Error::InvalidProfileUrl(format!(
                "{} '{}' contains invalid characters",
                field, value
            )));
        }
    }

    Ok(ProfileRef {
        service: service.to_string(),
        user_id: user_id.to_string(),
    })
}
