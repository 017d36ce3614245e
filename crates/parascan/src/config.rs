//! Scan configuration

use crate::client::FetchOptions;
use crate::error::ConfigError;
use std::path::PathBuf;
use std::time::Duration;

/// Default destination of the JSON report
pub const DEFAULT_JSON_OUTPUT: &str = "results.json";

/// Everything one scan run needs, populated once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Pages to scan, in order
    pub urls: Vec<String>,
    /// Words to search for, in order
    pub words: Vec<String>,
    /// JSON report destination (always written)
    pub json_output: PathBuf,
    /// Markdown report destination (written only when set)
    pub markdown_output: Option<PathBuf>,
    /// Custom User-Agent
    pub user_agent: Option<String>,
    /// Per-request timeout; none by default
    pub timeout: Option<Duration>,
}

impl ScanConfig {
    pub fn new<U, W>(urls: U, words: W) -> Self
    where
        U: IntoIterator,
        U::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            words: words.into_iter().map(Into::into).collect(),
            json_output: PathBuf::from(DEFAULT_JSON_OUTPUT),
            markdown_output: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Set JSON report destination
    pub fn json_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_output = path.into();
        self
    }

    /// Request a Markdown report at `path`
    pub fn markdown_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.markdown_output = Some(path.into());
        self
    }

    /// Set custom User-Agent
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Check that there is something to scan for
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.urls.is_empty() {
            return Err(ConfigError::NoUrls);
        }
        if self.words.is_empty() {
            return Err(ConfigError::NoWords);
        }
        if self.words.iter().all(|w| w.is_empty()) {
            return Err(ConfigError::NoUsableWords);
        }
        Ok(())
    }

    /// HTTP options derived from this config
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            user_agent: self.user_agent.clone(),
            timeout: self.timeout,
        }
    }
}
