use crate::extractor::{SourceKind, TextSource};
use crate::ocr::OcrEngine;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Scanned-PDF routine: rasterize each page to PNG, OCR every page image,
/// and concatenate the page texts with newline separators
pub struct PdfSource {
    path: PathBuf,
    ocr: OcrEngine,
}

impl PdfSource {
    pub fn new(path: PathBuf, ocr: OcrEngine) -> Self {
        Self { path, ocr }
    }
}

#[async_trait]
impl TextSource for PdfSource {
    async fn extract_impl(&self) -> Result<String> {
        // Page images live in a scoped temp directory, removed on drop
        let pages_dir = tempfile::tempdir().context("failed to create page image directory")?;

        let pages = self
            .ocr
            .rasterize_pdf(&self.path, pages_dir.path())
            .await
            .with_context(|| format!("failed to rasterize {}", self.path.display()))?;

        debug!(pdf = %self.path.display(), pages = pages.len(), "rasterized PDF");

        let mut text = String::new();
        for page in &pages {
            let page_text = self
                .ocr
                .image_to_text(page)
                .await
                .with_context(|| format!("OCR failed on page image {}", page.display()))?;
            text.push_str(&page_text);
            text.push('\n');
        }

        Ok(text)
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Pdf
    }
}
