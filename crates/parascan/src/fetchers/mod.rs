//! Fetcher system for retrieving page text
//!
//! Design: the scanner only sees the [`Fetcher`] trait, so pages can come
//! from HTTP ([`HttpFetcher`]) or from any other source a caller plugs in.

mod http;

pub use http::HttpFetcher;

use crate::error::FetchError;
use crate::types::FetchedPage;
use async_trait::async_trait;

/// Trait for page fetchers
///
/// Implementations return the page text already decoded to UTF-8.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Unique identifier for this fetcher (for logging/debugging)
    fn name(&self) -> &'static str;

    /// Fetch and decode the page at `url`
    ///
    /// Any failure is returned as a [`FetchError`]; callers treat it as
    /// fatal for the run.
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Validate that `url` is a parseable http(s) URL
pub(crate) fn parse_http_url(url: &str) -> Result<url::Url, FetchError> {
    if url.is_empty() {
        return Err(FetchError::MissingUrl);
    }
    let parsed = url::Url::parse(url).map_err(|_| FetchError::InvalidUrlScheme)?;
    // Scheme is already lower-cased by the parser
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(FetchError::InvalidUrlScheme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_http_url() {
        assert!(parse_http_url("https://example.com/page").is_ok());
        assert!(parse_http_url("http://127.0.0.1:8080/").is_ok());
        assert!(matches!(parse_http_url(""), Err(FetchError::MissingUrl)));
        assert!(matches!(
            parse_http_url("ftp://example.com"),
            Err(FetchError::InvalidUrlScheme)
        ));
        assert!(matches!(
            parse_http_url("https://"),
            Err(FetchError::InvalidUrlScheme)
        ));
        assert!(matches!(
            parse_http_url("not a url"),
            Err(FetchError::InvalidUrlScheme)
        ));
    }

    #[test]
    fn test_parse_http_url_scheme_is_case_insensitive() {
        let parsed = parse_http_url("HTTPS://example.com/").unwrap();
        assert_eq!(parsed.scheme(), "https");
        assert!(parse_http_url("Http://example.com/page").is_ok());
        assert!(matches!(
            parse_http_url("FTP://example.com"),
            Err(FetchError::InvalidUrlScheme)
        ));
    }
}
