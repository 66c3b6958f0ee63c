//! End-to-end extraction: document text in, ordered vocabulary list out.

use serde::Serialize;

use crate::error::Result;
use crate::extract::{CandidatePass, FallbackPass, PrimaryPass};
use crate::region::RegionLocator;
use crate::session::{ExtractionSession, HashedIds, IdSource};
use crate::source::{assemble_document, PageSource};
use crate::types::{ExtractionConfig, VocabularyItem};

/// Outcome of one extraction run.
///
/// A short list is a normal outcome; whether it is usable is up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    pub items: Vec<VocabularyItem>,
    /// Whether a vocabulary-list header narrowed the scanned text.
    pub region_found: bool,
    /// Items accepted by the primary pass alone.
    pub primary_accepted: usize,
    pub fallback_used: bool,
}

impl ExtractionReport {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn meets_minimum(&self, min_items: usize) -> bool {
        self.items.len() >= min_items
    }
}

/// Runs region location, both extractor passes and deduplication.
#[derive(Debug, Clone)]
pub struct VocabularyExtractor {
    config: ExtractionConfig,
    locator: RegionLocator,
}

impl VocabularyExtractor {
    pub fn new(config: ExtractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            locator: RegionLocator::default(),
        })
    }

    pub fn with_locator(mut self, locator: RegionLocator) -> Self {
        self.locator = locator;
        self
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract from already assembled document text.
    pub fn extract_text(&self, text: &str) -> ExtractionReport {
        self.extract_text_with_ids(text, HashedIds::default())
    }

    pub fn extract_text_with_ids<I: IdSource>(&self, text: &str, ids: I) -> ExtractionReport {
        let region = self.locator.locate(text);
        let mut session = ExtractionSession::new(ids);

        let primary_accepted = session.accept_all(PrimaryPass.candidates(region.text, &self.config));
        let fallback_used = primary_accepted < self.config.min_primary_yield;
        if fallback_used {
            let recovered = session.accept_all(FallbackPass.candidates(region.text, &self.config));
            tracing::debug!(primary_accepted, recovered, "fallback pass ran");
        }

        let report = ExtractionReport {
            items: session.into_items(),
            region_found: region.marker_offset.is_some(),
            primary_accepted,
            fallback_used,
        };
        tracing::info!(
            total = report.len(),
            primary_accepted,
            fallback_used,
            region_found = report.region_found,
            "vocabulary extraction finished"
        );
        report
    }

    /// Fetch every page from `source`, assemble the document and extract.
    pub async fn extract_source<S: PageSource>(&self, source: &S) -> Result<ExtractionReport> {
        self.extract_source_with_ids(source, HashedIds::default()).await
    }

    pub async fn extract_source_with_ids<S: PageSource, I: IdSource>(
        &self,
        source: &S,
        ids: I,
    ) -> Result<ExtractionReport> {
        let text = assemble_document(source, &self.config).await?;
        Ok(self.extract_text_with_ids(&text, ids))
    }
}
