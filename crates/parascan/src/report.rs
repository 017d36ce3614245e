//! Report aggregation and output
//!
//! A [`Report`] maps each scanned URL to its [`MatchSet`], in the order the
//! URLs were scanned. It serializes to pretty JSON and renders to Markdown.

use crate::error::ReportError;
use crate::types::MatchSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Matches for every scanned URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    pages: IndexMap<String, MatchSet>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the match set for `url`
    ///
    /// Scanning the same URL twice replaces the earlier entry in place.
    pub fn insert(&mut self, url: impl Into<String>, matches: MatchSet) {
        self.pages.insert(url.into(), matches);
    }

    /// Match set for `url`, if it was scanned
    pub fn get(&self, url: &str) -> Option<&MatchSet> {
        self.pages.get(url)
    }

    /// Scanned URLs in scan order
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Iterate over `(url, match set)` pairs in scan order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MatchSet)> {
        self.pages.iter().map(|(url, set)| (url.as_str(), set))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of highlighted paragraphs across all URLs and words
    pub fn match_count(&self) -> usize {
        self.pages
            .values()
            .flat_map(|set| set.values())
            .map(Vec::len)
            .sum()
    }

    /// Serialize as 2-space indented JSON, non-ASCII left unescaped
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a report previously written by [`Report::to_json`]
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as Markdown
    ///
    /// Each URL becomes a `##` heading, each word a `###` heading with one
    /// bullet per paragraph, and every URL block ends with a blank line.
    pub fn to_markdown(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        for (url, words) in &self.pages {
            lines.push(format!("## {}", url));
            for (word, paragraphs) in words {
                lines.push(format!("### {}", word));
                for paragraph in paragraphs {
                    lines.push(format!("- {}", paragraph));
                }
            }
            lines.push(String::new());
        }
        lines.join("\n")
    }

    /// Write the JSON form to `path`
    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        let json = self.to_json()?;
        write_file(path, &json)?;
        info!(path = %path.display(), urls = self.len(), "Wrote JSON report");
        Ok(())
    }

    /// Write the Markdown form to `path`
    pub fn write_markdown(&self, path: &Path) -> Result<(), ReportError> {
        write_file(path, &self.to_markdown())?;
        info!(path = %path.display(), urls = self.len(), "Wrote Markdown report");
        Ok(())
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), ReportError> {
    std::fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
