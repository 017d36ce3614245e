//! HTTP client entry points for Parascan
//!
//! The actual fetch logic lives in the [`fetchers`](crate::fetchers) module.
//! These helpers build a one-off [`HttpFetcher`] for callers that only need
//! a single page.

use crate::error::FetchError;
use crate::fetchers::{Fetcher, HttpFetcher};
use crate::types::FetchedPage;
use std::time::Duration;

/// Options for the HTTP fetcher
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Custom User-Agent
    pub user_agent: Option<String>,
    /// Total request timeout; no timeout when unset
    pub timeout: Option<Duration>,
}

impl FetchOptions {
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
}

/// Fetch a URL with default options and return the decoded page
pub async fn fetch_page(url: &str) -> Result<FetchedPage, FetchError> {
    fetch_page_with_options(url, FetchOptions::default()).await
}

/// Fetch a URL with custom options
pub async fn fetch_page_with_options(
    url: &str,
    options: FetchOptions,
) -> Result<FetchedPage, FetchError> {
    // Validate URL early
    if url.is_empty() {
        return Err(FetchError::MissingUrl);
    }

    let fetcher = HttpFetcher::new(&options)?;
    fetcher.fetch(url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_empty_url() {
        let result = fetch_page("").await;
        assert!(matches!(result, Err(FetchError::MissingUrl)));
    }

    #[tokio::test]
    async fn test_fetch_invalid_scheme() {
        let result = fetch_page("ftp://example.com").await;
        assert!(matches!(result, Err(FetchError::InvalidUrlScheme)));
    }

    #[test]
    fn test_fetch_options_default() {
        let options = FetchOptions::default();
        assert!(options.user_agent.is_none());
        assert!(options.timeout.is_none());
    }

    #[test]
    fn test_fetch_options_builder() {
        let options = FetchOptions::default()
            .user_agent("TestBot/1.0")
            .timeout(Duration::from_secs(5));
        assert_eq!(options.user_agent.as_deref(), Some("TestBot/1.0"));
        assert_eq!(options.timeout, Some(Duration::from_secs(5)));
    }
}
