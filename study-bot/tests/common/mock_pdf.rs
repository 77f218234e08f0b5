//! Canned [`pdf_reader::PdfExtractor`].

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use pdf_reader::{ExtractionError, PdfExtractor};

pub struct MockPdf {
    pages: Option<Vec<String>>,
    /// Path handed to each call and whether it existed at that moment.
    pub seen: Mutex<Vec<(PathBuf, bool)>>,
}

impl MockPdf {
    pub fn with_pages(pages: &[&str]) -> Self {
        Self {
            pages: Some(pages.iter().map(|p| p.to_string()).collect()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Every extraction fails with `Malformed`.
    pub fn broken() -> Self {
        Self {
            pages: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl PdfExtractor for MockPdf {
    async fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractionError> {
        self.seen
            .lock()
            .unwrap()
            .push((path.to_path_buf(), path.exists()));
        match &self.pages {
            Some(pages) => Ok(pages.clone()),
            None => Err(ExtractionError::Malformed("invalid xref table".to_string())),
        }
    }
}
