//! Fragment dumps: pre-decoded pages stored as JSON.
//!
//! ```json
//! [
//!   [{"text": "cat", "x": 0, "y": 100}, {"text": "n. 猫", "x": 30, "y": 100}],
//!   [{"text": "dog", "x": 0, "y": 100}]
//! ]
//! ```
//!
//! Each page is decoded on demand, so a malformed page surfaces as a decode
//! failure for that page.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use vocab_core::{DecoderError, Fragment, PageSource};

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("failed to read fragment dump: {0}")]
    Io(#[from] std::io::Error),

    #[error("fragment dump is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fragment dump must be a JSON array of pages")]
    NotPageArray,
}

/// Pages held as raw JSON until requested.
#[derive(Debug, Clone)]
pub struct JsonPages {
    pages: Vec<Value>,
}

impl JsonPages {
    pub fn parse(raw: &str) -> Result<Self, DumpError> {
        match serde_json::from_str(raw)? {
            Value::Array(pages) => Ok(Self { pages }),
            _ => Err(DumpError::NotPageArray),
        }
    }

    pub async fn load(path: &Path) -> Result<Self, DumpError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Self::parse(&raw)
    }
}

impl PageSource for JsonPages {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    async fn page_fragments(&self, page: usize) -> Result<Vec<Fragment>, DecoderError> {
        let value = self
            .pages
            .get(page)
            .ok_or_else(|| format!("page {page} out of range"))?;
        Ok(Vec::<Fragment>::deserialize(value)?)
    }
}
