//! Error types for Parascan

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching a page
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL is missing
    #[error("Missing required parameter: url")]
    MissingUrl,

    /// URL has invalid scheme or cannot be parsed
    #[error("Invalid URL: must start with http:// or https://")]
    InvalidUrlScheme,

    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuildError(#[source] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Failed to connect to server
    #[error("Failed to connect to server: {url}")]
    ConnectError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("HTTP {status} for: {url}")]
    HttpStatus { status: u16, url: String },

    /// Other request error
    #[error("Request failed: {0}")]
    RequestError(String),
}

impl FetchError {
    /// Create an error from a reqwest error raised while fetching `url`
    pub fn from_reqwest(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(url.to_string())
        } else if err.is_connect() {
            FetchError::ConnectError {
                url: url.to_string(),
                source: err,
            }
        } else {
            FetchError::RequestError(err.to_string())
        }
    }
}

/// Errors that can occur while writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Report could not be serialized or parsed as JSON
    #[error("Invalid report JSON")]
    Json(#[from] serde_json::Error),

    /// Output file could not be written
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors in the scan configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("At least one URL is required")]
    NoUrls,

    #[error("At least one search word is required")]
    NoWords,

    #[error("All search words are empty")]
    NoUsableWords,

    #[error("Invalid search word {word:?}: {reason}")]
    InvalidWord { word: String, reason: String },
}

/// Any error that ends a scan run
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
