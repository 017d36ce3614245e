//! Whole-word paragraph matching and highlighting
//!
//! A search word is compiled as an escaped, case-insensitive literal. An
//! occurrence only counts when it stands alone: the characters right before
//! and right after it must be non-word characters or the edge of the text.
//! Every counted occurrence is rewritten in uppercase; nothing else in the
//! paragraph changes.

use crate::error::ConfigError;
use crate::types::MatchSet;
use regex::{Regex, RegexBuilder};
use std::ops::Range;

/// Word characters are letters, digits and underscore (Unicode aware)
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_boundary_before(text: &str, pos: usize) -> bool {
    text[..pos].chars().next_back().map_or(true, |c| !is_word_char(c))
}

fn is_boundary_after(text: &str, pos: usize) -> bool {
    text[pos..].chars().next().map_or(true, |c| !is_word_char(c))
}

/// Compiled whole-word pattern for one search word
#[derive(Debug, Clone)]
pub struct WordPattern {
    word: String,
    regex: Regex,
}

impl WordPattern {
    /// Compile a pattern for `word`
    ///
    /// Returns `Ok(None)` for an empty word, which can never be a standalone
    /// token.
    pub fn new(word: &str) -> Result<Option<Self>, ConfigError> {
        if word.is_empty() {
            return Ok(None);
        }
        let regex = RegexBuilder::new(&regex::escape(word))
            .case_insensitive(true)
            .build()
            .map_err(|e| ConfigError::InvalidWord {
                word: word.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Some(Self {
            word: word.to_string(),
            regex,
        }))
    }

    /// The search word as given
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Byte ranges of every whole-word occurrence in `text`
    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        let mut spans = Vec::new();
        let mut start = 0;
        while let Some(m) = self.regex.find_at(text, start) {
            if is_boundary_before(text, m.start()) && is_boundary_after(text, m.end()) {
                spans.push(m.range());
                start = m.end();
            } else {
                // A rejected candidate may overlap a valid one starting later
                let step = text[m.start()..].chars().next().map_or(1, char::len_utf8);
                start = m.start() + step;
            }
        }
        spans
    }

    /// True if `text` contains at least one whole-word occurrence
    pub fn is_match(&self, text: &str) -> bool {
        !self.find_spans(text).is_empty()
    }

    /// Uppercase every whole-word occurrence, or `None` if there is none
    pub fn highlight(&self, text: &str) -> Option<String> {
        let spans = self.find_spans(text);
        if spans.is_empty() {
            return None;
        }

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for span in spans {
            out.push_str(&text[last..span.start]);
            out.push_str(&text[span.clone()].to_uppercase());
            last = span.end;
        }
        out.push_str(&text[last..]);
        Some(out)
    }
}

/// Matches paragraphs against an ordered list of search words
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    patterns: Vec<WordPattern>,
}

impl Matcher {
    /// Compile one pattern per word, keeping the given order
    ///
    /// Empty words are skipped. Duplicates are kept; they produce the same
    /// entry again.
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self, ConfigError> {
        let mut patterns = Vec::with_capacity(words.len());
        for word in words {
            if let Some(pattern) = WordPattern::new(word.as_ref())? {
                patterns.push(pattern);
            }
        }
        Ok(Self { patterns })
    }

    /// Words this matcher searches for
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(WordPattern::word)
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Build the match set for a page's paragraphs
    ///
    /// Each word is matched independently; a paragraph containing two words
    /// appears under both, highlighted only for the word it is listed under.
    /// Words with no matching paragraph get no entry.
    pub fn match_paragraphs<S: AsRef<str>>(&self, paragraphs: &[S]) -> MatchSet {
        let mut set = MatchSet::new();
        for pattern in &self.patterns {
            let matches: Vec<String> = paragraphs
                .iter()
                .filter_map(|p| pattern.highlight(p.as_ref()))
                .collect();
            if !matches.is_empty() {
                set.insert(pattern.word().to_string(), matches);
            }
        }
        set
    }

    /// Highlight every word at once
    ///
    /// Returns the paragraph with all words uppercased if at least one of
    /// them occurs, `None` otherwise.
    pub fn highlight(&self, paragraph: &str) -> Option<String> {
        let mut current: Option<String> = None;
        for pattern in &self.patterns {
            let base = current.as_deref().unwrap_or(paragraph);
            if let Some(highlighted) = pattern.highlight(base) {
                current = Some(highlighted);
            }
        }
        current
    }
}
