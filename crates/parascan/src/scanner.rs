//! Scan driver: fetch, extract, match, aggregate
//!
//! URLs are processed strictly one after another in input order. The first
//! failure ends the run; nothing is written in that case.

use crate::client::FetchOptions;
use crate::config::ScanConfig;
use crate::error::{FetchError, ScanError};
use crate::fetchers::{Fetcher, HttpFetcher};
use crate::html::{HtmlParser, ScraperParser};
use crate::matcher::Matcher;
use crate::report::Report;
use crate::types::MatchSet;
use tracing::{debug, info};

/// Runs the fetch/match pipeline over pages
pub struct Scanner {
    fetcher: Box<dyn Fetcher>,
    parser: Box<dyn HtmlParser>,
}

impl Scanner {
    /// Create a scanner over HTTP with the `scraper` HTML parser
    pub fn new(options: &FetchOptions) -> Result<Self, FetchError> {
        Ok(Self::with_parts(
            Box::new(HttpFetcher::new(options)?),
            Box::new(ScraperParser::new()),
        ))
    }

    /// Create a scanner from a custom fetcher and parser
    pub fn with_parts(fetcher: Box<dyn Fetcher>, parser: Box<dyn HtmlParser>) -> Self {
        Self { fetcher, parser }
    }

    async fn paragraphs(&self, url: &str) -> Result<Vec<String>, ScanError> {
        debug!(fetcher = self.fetcher.name(), url = %url, "Using fetcher");
        let page = self.fetcher.fetch(url).await?;
        let paragraphs = self.parser.extract_paragraphs(&page.text);
        debug!(url = %url, paragraphs = paragraphs.len(), "Extracted paragraphs");
        Ok(paragraphs)
    }

    /// Fetch one page and match its paragraphs per word
    pub async fn scan_page(&self, url: &str, matcher: &Matcher) -> Result<MatchSet, ScanError> {
        let paragraphs = self.paragraphs(url).await?;
        let matches = matcher.match_paragraphs(&paragraphs);
        debug!(url = %url, words = matches.len(), "Matched words");
        Ok(matches)
    }

    /// Fetch one page and return every paragraph containing any word,
    /// with all words highlighted, in document order
    pub async fn highlight_page(
        &self,
        url: &str,
        matcher: &Matcher,
    ) -> Result<Vec<String>, ScanError> {
        let paragraphs = self.paragraphs(url).await?;
        Ok(paragraphs
            .iter()
            .filter_map(|p| matcher.highlight(p))
            .collect())
    }

    /// Scan every configured URL in order and build the report
    ///
    /// Every URL gets an entry, even when none of the words matched.
    pub async fn scan(&self, config: &ScanConfig) -> Result<Report, ScanError> {
        let matcher = Matcher::new(&config.words)?;
        let mut report = Report::new();
        for url in &config.urls {
            let matches = self.scan_page(url, &matcher).await?;
            report.insert(url.as_str(), matches);
        }
        Ok(report)
    }
}

/// Validate `config`, scan its URLs and write the requested reports
pub async fn run(config: &ScanConfig) -> Result<Report, ScanError> {
    let scanner = Scanner::new(&config.fetch_options())?;
    run_with(&scanner, config).await
}

/// Like [`run`], with a caller-supplied scanner
pub async fn run_with(scanner: &Scanner, config: &ScanConfig) -> Result<Report, ScanError> {
    config.validate()?;
    let report = scanner.scan(config).await?;
    info!(
        urls = report.len(),
        matches = report.match_count(),
        "Scan complete"
    );

    report.write_json(&config.json_output)?;
    if let Some(path) = &config.markdown_output {
        report.write_markdown(path)?;
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FetchedPage;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Serves canned pages and records the order of requests
    struct StaticFetcher {
        pages: HashMap<String, String>,
        requested: Arc<Mutex<Vec<String>>>,
    }

    impl StaticFetcher {
        fn new(pages: &[(&str, &str)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(url, html)| (url.to_string(), html.to_string()))
                    .collect(),
                requested: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl Fetcher for StaticFetcher {
        fn name(&self) -> &'static str {
            "static"
        }

        async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            match self.pages.get(url) {
                Some(html) => Ok(FetchedPage::new(url, html.as_str())),
                None => Err(FetchError::HttpStatus {
                    status: 404,
                    url: url.to_string(),
                }),
            }
        }
    }

    fn scanner(pages: &[(&str, &str)]) -> Scanner {
        Scanner::with_parts(
            Box::new(StaticFetcher::new(pages)),
            Box::new(ScraperParser::new()),
        )
    }

    #[tokio::test]
    async fn test_scan_page() {
        let scanner = scanner(&[(
            "https://example.com",
            "<p>The cat sat on the mat.</p><p>Category theory is hard.</p>",
        )]);
        let matcher = Matcher::new(&["cat"]).unwrap();
        let matches = scanner
            .scan_page("https://example.com", &matcher)
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches["cat"], vec!["The CAT sat on the mat."]);
    }

    #[tokio::test]
    async fn test_scan_keeps_every_url_in_order() {
        let scanner = scanner(&[
            ("https://one.example.com", "<p>No pets here.</p>"),
            ("https://two.example.com", "<p>A dog barked.</p>"),
        ]);
        let config = ScanConfig::new(
            ["https://one.example.com", "https://two.example.com"],
            ["dog"],
        );
        let report = scanner.scan(&config).await.unwrap();

        let urls: Vec<&str> = report.urls().collect();
        assert_eq!(urls, vec!["https://one.example.com", "https://two.example.com"]);
        assert!(report.get("https://one.example.com").unwrap().is_empty());
        assert_eq!(
            report.get("https://two.example.com").unwrap()["dog"],
            vec!["A DOG barked."]
        );
    }

    #[tokio::test]
    async fn test_scan_stops_at_first_failure() {
        let fetcher = StaticFetcher::new(&[("https://ok.example.com", "<p>dog</p>")]);
        let requested = Arc::clone(&fetcher.requested);
        let config = ScanConfig::new(
            ["https://missing.example.com", "https://ok.example.com"],
            ["dog"],
        );
        let scanner = Scanner::with_parts(Box::new(fetcher), Box::new(ScraperParser::new()));
        let result = scanner.scan(&config).await;
        assert!(matches!(
            result,
            Err(ScanError::Fetch(FetchError::HttpStatus { status: 404, .. }))
        ));
        assert_eq!(
            *requested.lock().unwrap(),
            vec!["https://missing.example.com".to_string()]
        );
    }

    #[tokio::test]
    async fn test_highlight_page() {
        let scanner = scanner(&[(
            "https://example.com",
            "<p>A dog chased the cat.</p><p>Nothing here.</p><p>Cat nap.</p>",
        )]);
        let matcher = Matcher::new(&["cat", "dog"]).unwrap();
        let lines = scanner
            .highlight_page("https://example.com", &matcher)
            .await
            .unwrap();
        assert_eq!(lines, vec!["A DOG chased the CAT.", "CAT nap."]);
    }

    #[tokio::test]
    async fn test_run_with_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("out.json");
        let md_path = dir.path().join("out.md");
        let scanner = scanner(&[("https://example.com", "<p>The cat sat.</p>")]);
        let config = ScanConfig::new(["https://example.com"], ["cat"])
            .json_output(&json_path)
            .markdown_output(&md_path);

        let report = run_with(&scanner, &config).await.unwrap();

        let json = std::fs::read_to_string(&json_path).unwrap();
        assert_eq!(Report::from_json(&json).unwrap(), report);
        let markdown = std::fs::read_to_string(&md_path).unwrap();
        assert_eq!(
            markdown,
            "## https://example.com\n### cat\n- The CAT sat.\n"
        );
    }

    #[tokio::test]
    async fn test_run_with_skips_markdown_when_not_requested() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("results.json");
        let scanner = scanner(&[("https://example.com", "<p>The cat sat.</p>")]);
        let config = ScanConfig::new(["https://example.com"], ["cat"]).json_output(&json_path);

        run_with(&scanner, &config).await.unwrap();

        assert!(json_path.exists());
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[tokio::test]
    async fn test_run_with_rejects_invalid_config_before_fetching() {
        let fetcher = StaticFetcher::new(&[]);
        let requested = Arc::clone(&fetcher.requested);
        let scanner = Scanner::with_parts(Box::new(fetcher), Box::new(ScraperParser::new()));
        let config = ScanConfig::new(["https://example.com"], Vec::<String>::new());
        let result = run_with(&scanner, &config).await;
        assert!(matches!(
            result,
            Err(ScanError::Config(crate::error::ConfigError::NoWords))
        ));
        assert!(requested.lock().unwrap().is_empty());
    }
}
