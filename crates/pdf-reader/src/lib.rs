//! # pdf-reader
//!
//! PDF adapter for the study bot. [`PdfExtractor`] turns a PDF on disk into one string per page;
//! [`PdfExtractReader`] implements it with `pdf-extract` on tokio's blocking pool.
//! [`join_pages`] is the page-joining policy used before text is stored.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Why text could not be extracted from a PDF.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed PDF: {0}")]
    Malformed(String),

    #[error("PDF parser crashed: {0}")]
    Panicked(String),
}

/// Extracts text page by page.
#[async_trait]
pub trait PdfExtractor: Send + Sync {
    async fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractionError>;
}

/// Concatenates page texts, each followed by a newline: `["a\n", "b\n"]` → `"a\n\nb\n\n"`.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.as_ref().len() + 1).sum());
    for page in pages {
        text.push_str(page.as_ref());
        text.push('\n');
    }
    text
}

/// [`PdfExtractor`] backed by the `pdf-extract` crate.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractReader;

impl PdfExtractReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PdfExtractor for PdfExtractReader {
    #[instrument(skip(self))]
    async fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractionError> {
        let path = path.to_path_buf();
        if let Err(source) = tokio::fs::metadata(&path).await {
            return Err(ExtractionError::Unreadable { path, source });
        }

        // pdf-extract is synchronous and may panic on hostile input; the join error captures it.
        let result = tokio::task::spawn_blocking(move || pdf_extract::extract_text_by_pages(&path))
            .await
            .map_err(|e| {
                warn!(error = %e, "PDF extraction task failed");
                ExtractionError::Panicked(e.to_string())
            })?;

        let pages = result.map_err(|e| ExtractionError::Malformed(e.to_string()))?;
        info!(pages = pages.len(), "PDF text extracted");
        Ok(pages)
    }
}
