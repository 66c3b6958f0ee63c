//! Heuristic word/definition extraction passes.

pub mod fallback;
pub mod primary;

use crate::script::{contains_cjk, has_pos_marker};
use crate::types::{ExtractionConfig, VocabularyCandidate};

pub use fallback::FallbackPass;
pub use primary::PrimaryPass;

/// Why a matched candidate was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    StopWord,
    MissingPosMarker,
    MissingCjk,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StopWord => "stop_word",
            Self::MissingPosMarker => "missing_pos_marker",
            Self::MissingCjk => "missing_cjk",
        }
    }
}

/// Rules every candidate must pass regardless of which pass found it.
pub fn screen(word: &str, definition: &str, config: &ExtractionConfig) -> Option<Rejection> {
    if config.is_stop_word(word) {
        Some(Rejection::StopWord)
    } else if !has_pos_marker(definition) {
        Some(Rejection::MissingPosMarker)
    } else if !contains_cjk(definition) {
        Some(Rejection::MissingCjk)
    } else {
        None
    }
}

/// A scan over the vocabulary region producing raw candidates in text order.
pub trait CandidatePass: Send + Sync {
    /// Pass identifier, used in logs.
    fn name(&self) -> &'static str;

    fn candidates(&self, text: &str, config: &ExtractionConfig) -> Vec<VocabularyCandidate>;
}

fn keep(pass: &'static str, word: &str, definition: &str, config: &ExtractionConfig) -> bool {
    match screen(word, definition, config) {
        Some(reason) => {
            tracing::trace!(pass, word, reason = reason.as_str(), "rejected candidate");
            false
        }
        None => true,
    }
}
