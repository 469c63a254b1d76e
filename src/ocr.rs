use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::config::OcrConfig;

/// Driver for the external OCR toolchain: `tesseract` for recognition and
/// `pdftoppm` for rasterizing PDF pages. Both are invoked as subprocesses;
/// tool paths and the recognition language set come from [`OcrConfig`].
#[derive(Debug, Clone)]
pub struct OcrEngine {
    languages: String,
    tesseract_path: PathBuf,
    pdftoppm_path: PathBuf,
    pdf_dpi: u32,
}

impl OcrEngine {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            languages: config.languages.clone(),
            tesseract_path: config.tesseract_path.clone(),
            pdftoppm_path: config.pdftoppm_path.clone(),
            pdf_dpi: config.pdf_dpi,
        }
    }

    /// The configured Tesseract language set, e.g. "eng+hin+mar"
    pub fn languages(&self) -> &str {
        &self.languages
    }

    /// Run OCR on a single raster image and return the recognized text
    pub async fn image_to_text(&self, image: &Path) -> Result<String> {
        let output = Command::new(&self.tesseract_path)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.languages)
            .output()
            .await
            .with_context(|| format!("failed to run {}", self.tesseract_path.display()))?;

        if !output.status.success() {
            bail!(
                "tesseract exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Rasterize every page of a PDF into PNG files under `out_dir`,
    /// returning the page images in page order.
    pub async fn rasterize_pdf(&self, pdf: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
        let prefix = out_dir.join("page");

        let output = Command::new(&self.pdftoppm_path)
            .arg("-png")
            .arg("-r")
            .arg(self.pdf_dpi.to_string())
            .arg(pdf)
            .arg(&prefix)
            .output()
            .await
            .with_context(|| format!("failed to run {}", self.pdftoppm_path.display()))?;

        if !output.status.success() {
            bail!(
                "pdftoppm exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let mut pages = Vec::new();
        let mut entries = tokio::fs::read_dir(out_dir)
            .await
            .with_context(|| format!("failed to list page images in {}", out_dir.display()))?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "png") {
                pages.push(path);
            }
        }

        // pdftoppm zero-pads page numbers, so lexicographic order is page order
        pages.sort();

        if pages.is_empty() {
            bail!("pdftoppm produced no page images for {}", pdf.display());
        }

        Ok(pages)
    }
}
