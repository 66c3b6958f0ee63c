//! Page retrieval from an external document decoder.
//!
//! Decoding the document container is out of scope for this crate. A decoder
//! exposes its pages through [`PageSource`]; [`assemble_document`] fetches
//! every page concurrently and joins the page blocks strictly in page order.

use std::future::Future;

use futures::future::try_join_all;
use tracing::Instrument;

use crate::error::{DecoderError, ExtractError, Result};
use crate::layout::{document_text, page_text};
use crate::types::{ExtractionConfig, Fragment};

/// A decoded document that yields positioned fragments per page.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Fragments for the zero-based `page`, in whatever order the decoder emits them.
    fn page_fragments(
        &self,
        page: usize,
    ) -> impl Future<Output = std::result::Result<Vec<Fragment>, DecoderError>> + Send;
}

/// Pages that were decoded ahead of time.
#[derive(Debug, Clone, Default)]
pub struct MemoryPages {
    pages: Vec<Vec<Fragment>>,
}

impl MemoryPages {
    pub fn new(pages: Vec<Vec<Fragment>>) -> Self {
        Self { pages }
    }
}

impl From<Vec<Vec<Fragment>>> for MemoryPages {
    fn from(pages: Vec<Vec<Fragment>>) -> Self {
        Self::new(pages)
    }
}

impl PageSource for MemoryPages {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    async fn page_fragments(&self, page: usize) -> std::result::Result<Vec<Fragment>, DecoderError> {
        self.pages
            .get(page)
            .cloned()
            .ok_or_else(|| format!("page {page} out of range").into())
    }
}

/// Fetch all pages concurrently and build the document text.
///
/// Any page failing to decode aborts the whole run.
pub async fn assemble_document<S: PageSource>(source: &S, config: &ExtractionConfig) -> Result<String> {
    let count = source.page_count();
    let span = tracing::debug_span!("assemble_document", pages = count);

    async move {
        let fetches = (0..count).map(|page| async move {
            source
                .page_fragments(page)
                .await
                .map_err(|e| ExtractError::decode(page, e))
        });
        let pages = try_join_all(fetches).await?;

        let blocks: Vec<String> = pages
            .iter()
            .map(|fragments| page_text(fragments, config))
            .collect();
        Ok(document_text(&blocks))
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct BrokenPage {
        pages: usize,
        broken: usize,
    }

    impl PageSource for BrokenPage {
        fn page_count(&self) -> usize {
            self.pages
        }

        async fn page_fragments(&self, page: usize) -> std::result::Result<Vec<Fragment>, DecoderError> {
            if page == self.broken {
                Err("unsupported compression filter".into())
            } else {
                Ok(vec![Fragment::new("ok", 0.0, 10.0)])
            }
        }
    }

    #[test]
    fn assemble_in_page_order() {
        let pages = MemoryPages::new(vec![
            vec![Fragment::new("猫", 40.0, 700.0), Fragment::new("cat", 0.0, 700.0)],
            vec![Fragment::new("dog", 0.0, 700.0), Fragment::new("狗", 40.0, 701.0)],
        ]);
        let text = tokio_test::block_on(assemble_document(&pages, &ExtractionConfig::default())).unwrap();
        assert_eq!(text, "cat 猫\n\ndog 狗\n");
    }

    #[test]
    fn empty_document() {
        let pages = MemoryPages::default();
        let text = tokio_test::block_on(assemble_document(&pages, &ExtractionConfig::default())).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn decode_failure_reports_page() {
        let source = BrokenPage { pages: 3, broken: 1 };
        let err = tokio_test::block_on(assemble_document(&source, &ExtractionConfig::default())).unwrap_err();
        match err {
            ExtractError::Decode { page, source } => {
                assert_eq!(page, 1);
                assert_eq!(source.to_string(), "unsupported compression filter");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
