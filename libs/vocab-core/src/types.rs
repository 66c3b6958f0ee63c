//! Core types for vocabulary extraction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{ExtractError, Result};

/// A positioned run of text recovered from one page.
///
/// `y` is a baseline in page space where larger values sit higher on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl Fragment {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// Fragments sharing a baseline, ordered left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Baseline of the first fragment assigned to this row.
    pub y: f64,
    pub fragments: Vec<Fragment>,
}

impl Row {
    /// Fragment texts joined by a single space.
    pub fn text(&self) -> String {
        self.fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A word/definition pair produced by an extractor pass, before dedup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyCandidate {
    pub word: String,
    pub definition: String,
}

impl VocabularyCandidate {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }
}

/// An accepted vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub id: String,
    pub word: String,
    pub definition: String,
    pub level: u32,
    pub original_index: usize,
}

/// How a fragment is assigned when several rows are within tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowClustering {
    /// The earliest-created matching row wins.
    FirstMatch,
    /// The row whose baseline is closest wins; ties go to the earlier row.
    NearestBaseline,
}

impl Default for RowClustering {
    fn default() -> Self {
        Self::FirstMatch
    }
}

/// Header and footer terms that are never vocabulary.
pub const DEFAULT_STOP_WORDS: [&str; 10] = [
    "page",
    "list",
    "unit",
    "story",
    "section",
    "part",
    "vocabulary",
    "word",
    "audio",
    "track",
];

/// Tunables for one extraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum baseline distance (exclusive) for two fragments to share a row.
    pub row_tolerance: f64,
    pub row_clustering: RowClustering,
    /// Fallback runs when the primary pass accepts fewer items than this.
    pub min_primary_yield: usize,
    /// Lower-cased words rejected by both passes.
    pub stop_words: BTreeSet<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            row_tolerance: 4.0,
            row_clustering: RowClustering::default(),
            min_primary_yield: 5,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl ExtractionConfig {
    /// Replace the stop-word set. Words are stored lower-cased.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        self
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.row_tolerance.is_finite() || self.row_tolerance <= 0.0 {
            return Err(ExtractError::InvalidConfig(format!(
                "row_tolerance must be a positive number, got {}",
                self.row_tolerance
            )));
        }
        Ok(())
    }
}
