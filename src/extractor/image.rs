use crate::extractor::{SourceKind, TextSource};
use crate::ocr::OcrEngine;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Image routine: run OCR directly on the uploaded raster image
pub struct ImageSource {
    path: PathBuf,
    ocr: OcrEngine,
}

impl ImageSource {
    pub fn new(path: PathBuf, ocr: OcrEngine) -> Self {
        Self { path, ocr }
    }
}

#[async_trait]
impl TextSource for ImageSource {
    async fn extract_impl(&self) -> Result<String> {
        self.ocr
            .image_to_text(&self.path)
            .await
            .with_context(|| format!("OCR failed on {}", self.path.display()))
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Image
    }
}
