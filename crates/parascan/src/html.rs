//! Paragraph extraction from HTML

use scraper::{Html, Selector};
use std::sync::OnceLock;

/// Extracts paragraph text from an HTML document
pub trait HtmlParser: Send + Sync {
    /// Return the text of every paragraph, in document order
    fn extract_paragraphs(&self, html: &str) -> Vec<String>;
}

/// [`HtmlParser`] backed by the `scraper` crate
///
/// Parsing is lenient: malformed markup is repaired the way browsers do
/// and never produces an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperParser;

impl ScraperParser {
    pub fn new() -> Self {
        Self
    }
}

fn paragraph_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("p").expect("static selector is valid"))
}

impl HtmlParser for ScraperParser {
    fn extract_paragraphs(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(paragraph_selector())
            .map(|element| element.text().collect::<String>())
            .collect()
    }
}
