//! Core types for Parascan

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Highlighted paragraphs per search word, in the order words first matched
///
/// A word is only present when at least one paragraph matched it.
pub type MatchSet = IndexMap<String, Vec<String>>;

/// A fetched and decoded page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedPage {
    /// The fetched URL
    pub url: String,

    /// HTTP status code
    pub status_code: u16,

    /// Content-Type header value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Name of the encoding the body was decoded with (e.g. "UTF-8")
    pub encoding: String,

    /// Decoded page text
    pub text: String,
}

impl FetchedPage {
    /// Create a page from already decoded text
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status_code: 200,
            encoding: "UTF-8".to_string(),
            text: text.into(),
            ..Default::default()
        }
    }
}
