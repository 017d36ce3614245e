//! Parascan - find the paragraphs of web pages that mention given words
//!
//! Fetches pages, extracts the text of every `<p>` element and keeps the
//! paragraphs containing a search word as a whole word, with each occurrence
//! of that word uppercased. Results for all pages are collected into a
//! [`Report`] that can be written as JSON and Markdown.
//!
//! ## Pipeline
//!
//! - [`Fetcher`] - returns decoded page text ([`HttpFetcher`] over HTTP)
//! - [`HtmlParser`] - splits a page into paragraphs ([`ScraperParser`])
//! - [`Matcher`] - whole-word, case-insensitive matching and highlighting
//! - [`Report`] - URL to [`MatchSet`] mapping with JSON/Markdown output
//! - [`Scanner`] - drives the above over a [`ScanConfig`]
//!
//! ## Example
//!
//! ```no_run
//! use parascan::{run, ScanConfig};
//!
//! # async fn demo() -> Result<(), parascan::ScanError> {
//! let config = ScanConfig::new(["https://example.com"], ["domain"])
//!     .markdown_output("results.md");
//! let report = run(&config).await?;
//! println!("{} paragraphs matched", report.match_count());
//! # Ok(())
//! # }
//! ```

pub mod charset;
pub mod client;
mod config;
mod error;
pub mod fetchers;
mod html;
mod matcher;
mod report;
mod scanner;
mod types;

pub use client::{fetch_page, fetch_page_with_options, FetchOptions};
pub use config::{ScanConfig, DEFAULT_JSON_OUTPUT};
pub use error::{ConfigError, FetchError, ReportError, ScanError};
pub use fetchers::{Fetcher, HttpFetcher};
pub use html::{HtmlParser, ScraperParser};
pub use matcher::{Matcher, WordPattern};
pub use report::Report;
pub use scanner::{run, run_with, Scanner};
pub use types::{FetchedPage, MatchSet};

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = "Parascan/1.0";
