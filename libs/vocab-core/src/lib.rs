//! Vocabulary list extraction from positioned document text.
//!
//! Provides:
//! - Row reconstruction and reading-order assembly of page fragments
//! - Vocabulary region detection within a longer document
//! - Strict line-based and loose stream-based word/definition extraction
//! - Definition normalization and case-insensitive deduplication
//!
//! Decoding the source document into fragments is left to the caller,
//! through the [`PageSource`] trait.

pub mod error;
pub mod extract;
pub mod layout;
pub mod normalize;
pub mod pipeline;
pub mod region;
pub mod script;
pub mod session;
pub mod source;
pub mod types;

pub use error::{DecoderError, ExtractError, Result};
pub use extract::{CandidatePass, FallbackPass, PrimaryPass, Rejection};
pub use layout::{document_text, page_block, page_text, reconstruct_rows};
pub use normalize::normalize_definition;
pub use pipeline::{ExtractionReport, VocabularyExtractor};
pub use region::{Region, RegionLocator};
pub use session::{ExtractionSession, HashedIds, IdSource, SequentialIds};
pub use source::{assemble_document, MemoryPages, PageSource};
pub use types::{
    ExtractionConfig, Fragment, Row, RowClustering, VocabularyCandidate, VocabularyItem,
    DEFAULT_STOP_WORDS,
};
