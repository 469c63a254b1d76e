/// Constants used throughout the textmill service
/// This module centralizes recognized extensions and configuration defaults

/// Extensions routed to the PDF rasterize-and-OCR routine
pub const PDF_EXTENSIONS: &[&str] = &[".pdf"];

/// Extensions routed to the image OCR routine
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

/// Extensions routed to the DOCX paragraph reader
pub const DOCX_EXTENSIONS: &[&str] = &[".docx"];

/// Extensions routed to the spreadsheet reader
pub const SPREADSHEET_EXTENSIONS: &[&str] = &[".xls", ".xlsx"];

/// Tesseract language set used when none is configured
pub const DEFAULT_OCR_LANGUAGES: &str = "eng+hin+mar";

/// Rasterization resolution for PDF pages
pub const DEFAULT_PDF_DPI: u32 = 200;

/// Response truncation cap, in characters
pub const DEFAULT_MAX_OUTPUT_CHARS: usize = 5000;

/// Working directory where uploads are persisted
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Listen address for the HTTP server
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Request body ceiling for the upload endpoint
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Marker returned when no routine matches the uploaded filename
pub const UNSUPPORTED_TYPE_MESSAGE: &str = "Unsupported file type";
