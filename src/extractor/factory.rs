use crate::constants::{DOCX_EXTENSIONS, IMAGE_EXTENSIONS, PDF_EXTENSIONS, SPREADSHEET_EXTENSIONS};
use crate::extractor::{DocxSource, ImageSource, PdfSource, SheetSource, TextSource};
use crate::ocr::OcrEngine;
use std::path::PathBuf;
use std::sync::Arc;

/// Factory for creating the extraction routine matching an uploaded filename
pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Select a routine by exact, case-sensitive suffix match against the
    /// recognized extensions, in precedence order: PDF, image, DOCX,
    /// spreadsheet. `None` means the file type is unsupported; the caller
    /// answers with the unsupported-type marker instead of an error.
    pub fn create(
        path: PathBuf,
        filename: &str,
        ocr: &OcrEngine,
    ) -> Option<Arc<dyn TextSource>> {
        if matches_any(filename, PDF_EXTENSIONS) {
            Some(Arc::new(PdfSource::new(path, ocr.clone())))
        } else if matches_any(filename, IMAGE_EXTENSIONS) {
            Some(Arc::new(ImageSource::new(path, ocr.clone())))
        } else if matches_any(filename, DOCX_EXTENSIONS) {
            Some(Arc::new(DocxSource::new(path)))
        } else if matches_any(filename, SPREADSHEET_EXTENSIONS) {
            Some(Arc::new(SheetSource::new(path, filename.ends_with(".xls"))))
        } else {
            None
        }
    }
}

fn matches_any(filename: &str, extensions: &[&str]) -> bool {
    extensions.iter().any(|ext| filename.ends_with(ext))
}
