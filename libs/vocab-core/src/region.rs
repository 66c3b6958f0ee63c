//! Vocabulary-list region detection.
//!
//! Study documents often open with a reading passage whose sentences look
//! enough like `word pos. 释义` to fool the extractors. Extraction starts at
//! the first list header instead.

use std::sync::LazyLock;

use regex::Regex;

use crate::script::CJK_CLASS;

// Latin headers must start on a word boundary; `词汇表` has no such boundary
// in running CJK text.
static START_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:(?:list|unit|chapter)\s*\d+\s*{CJK_CLASS}|vocabulary|word\s+list)|词汇表"
    ))
    .expect("valid start marker regex")
});

/// The slice of the document that extraction runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region<'a> {
    pub text: &'a str,
    /// Byte offset of the start marker in the full document, if one was found.
    pub marker_offset: Option<usize>,
}

/// Finds the start of the vocabulary list within a document.
#[derive(Debug, Clone)]
pub struct RegionLocator {
    marker: Regex,
}

impl Default for RegionLocator {
    fn default() -> Self {
        Self {
            marker: START_MARKER.clone(),
        }
    }
}

impl RegionLocator {
    pub fn with_pattern(marker: Regex) -> Self {
        Self { marker }
    }

    /// Trim `text` to start at the first marker, or return it whole.
    pub fn locate<'a>(&self, text: &'a str) -> Region<'a> {
        match self.marker.find(text) {
            Some(m) => {
                tracing::debug!(offset = m.start(), marker = m.as_str(), "vocabulary region located");
                Region {
                    text: &text[m.start()..],
                    marker_offset: Some(m.start()),
                }
            }
            None => {
                tracing::debug!("no vocabulary marker, using whole document");
                Region {
                    text,
                    marker_offset: None,
                }
            }
        }
    }
}
