//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using ExtractError.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Boxed error produced by a document decoder.
pub type DecoderError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can abort an extraction run.
///
/// A short or empty vocabulary list is not an error; see
/// [`ExtractionReport`](crate::pipeline::ExtractionReport).
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to decode page {page}: {source}")]
    Decode {
        page: usize,
        #[source]
        source: DecoderError,
    },

    #[error("invalid extraction config: {0}")]
    InvalidConfig(String),
}

impl ExtractError {
    /// Wrap a decoder failure for the given zero-based page index.
    pub fn decode(page: usize, source: impl Into<DecoderError>) -> Self {
        Self::Decode {
            page,
            source: source.into(),
        }
    }

    /// True when the input document itself could not be read.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
