//! HTTP fetcher
//!
//! Fetches pages over HTTP/HTTPS and decodes the body using content-based
//! encoding detection rather than the `Content-Type` charset.

use crate::charset::{decode_body, tld_hint};
use crate::client::FetchOptions;
use crate::error::FetchError;
use crate::fetchers::{parse_http_url, Fetcher};
use crate::types::FetchedPage;
use crate::DEFAULT_USER_AGENT;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use tracing::{info, warn};

/// Accept header sent with every request
const ACCEPT_HTML: &str = "text/html, application/xhtml+xml, */*;q=0.8";

/// HTTP fetcher
///
/// Holds one client for the whole run so connections are reused between
/// URLs. Non-success statuses are errors.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher from options
    pub fn new(options: &FetchOptions) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        let user_agent = options.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
        );
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(FetchError::ClientBuildError)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let parsed = parse_http_url(url)?;

        let response = self
            .client
            .get(parsed.clone())
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url))?;

        let tld = tld_hint(&parsed);
        let decoded = decode_body(&body, tld.as_deref());
        if decoded.had_errors {
            warn!(
                url = %url,
                encoding = decoded.encoding.name(),
                "Body contained malformed sequences, replaced with U+FFFD"
            );
        }

        info!(
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            encoding = decoded.encoding.name(),
            "Fetched page"
        );

        Ok(FetchedPage {
            url: url.to_string(),
            status_code: status.as_u16(),
            content_type,
            encoding: decoded.encoding.name().to_string(),
            text: decoded.text,
        })
    }
}
