use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_MAX_OUTPUT_CHARS, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_OCR_LANGUAGES,
    DEFAULT_PDF_DPI, DEFAULT_UPLOAD_DIR,
};

/// Application configuration loaded from settings.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ocr: OcrConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// What happens to an extraction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// The failure becomes a diagnostic string inside the returned text;
    /// the request still succeeds at the transport level.
    #[default]
    Embed,
    /// The failure surfaces as a server-error response.
    Propagate,
}

/// Shape of the upload endpoint's response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    /// Plain-text body.
    #[default]
    Text,
    /// JSON object carrying the filename and the extracted text.
    Structured,
}

/// What happens to an uploaded file once its request has been answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Retention {
    /// Leave the file in the working directory.
    #[default]
    Keep,
    /// Remove the file after the response text is produced.
    DeleteAfterProcessing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default)]
    pub response_shape: ResponseShape,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
    #[serde(default)]
    pub retention: Retention,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Tesseract language string, e.g. "eng+hin+mar"
    #[serde(default = "default_ocr_languages")]
    pub languages: String,
    #[serde(default = "default_tesseract_path")]
    pub tesseract_path: PathBuf,
    #[serde(default = "default_pdftoppm_path")]
    pub pdftoppm_path: PathBuf,
    #[serde(default = "default_pdf_dpi")]
    pub pdf_dpi: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Truncation cap in characters, not bytes
    #[serde(default = "default_max_output_chars")]
    pub max_output_chars: usize,
    #[serde(default = "default_strip_blank_lines")]
    pub strip_blank_lines: bool,
    #[serde(default)]
    pub error_policy: ErrorPolicy,
}

fn default_bind() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from(DEFAULT_UPLOAD_DIR)
}

fn default_ocr_languages() -> String {
    DEFAULT_OCR_LANGUAGES.to_string()
}

fn default_tesseract_path() -> PathBuf {
    PathBuf::from("tesseract")
}

fn default_pdftoppm_path() -> PathBuf {
    PathBuf::from("pdftoppm")
}

fn default_pdf_dpi() -> u32 {
    DEFAULT_PDF_DPI
}

fn default_max_output_chars() -> usize {
    DEFAULT_MAX_OUTPUT_CHARS
}

fn default_strip_blank_lines() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            response_shape: ResponseShape::default(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            retention: Retention::default(),
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            languages: default_ocr_languages(),
            tesseract_path: default_tesseract_path(),
            pdftoppm_path: default_pdftoppm_path(),
            pdf_dpi: default_pdf_dpi(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_output_chars: default_max_output_chars(),
            strip_blank_lines: default_strip_blank_lines(),
            error_policy: ErrorPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration from default locations or return defaults
    pub fn load() -> Result<Self> {
        let default_paths = [
            PathBuf::from("config/settings.toml"),
            PathBuf::from("./settings.toml"),
        ];

        for path in &default_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.server.response_shape, ResponseShape::Text);
        assert_eq!(config.storage.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.storage.retention, Retention::Keep);
        assert_eq!(config.ocr.languages, "eng+hin+mar");
        assert_eq!(config.ocr.pdf_dpi, 200);
        assert_eq!(config.extraction.max_output_chars, 5000);
        assert!(config.extraction.strip_blank_lines);
        assert_eq!(config.extraction.error_policy, ErrorPolicy::Embed);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [extraction]
            max_output_chars = 3000
            strip_blank_lines = false
            "#,
        )
        .unwrap();

        assert_eq!(config.extraction.max_output_chars, 3000);
        assert!(!config.extraction.strip_blank_lines);
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.ocr.languages, "eng+hin+mar");
    }

    #[test]
    fn test_enum_spellings() {
        let config: Config = toml::from_str(
            r#"
            [server]
            response_shape = "structured"

            [storage]
            retention = "delete_after_processing"

            [extraction]
            error_policy = "propagate"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.response_shape, ResponseShape::Structured);
        assert_eq!(config.storage.retention, Retention::DeleteAfterProcessing);
        assert_eq!(config.extraction.error_policy, ErrorPolicy::Propagate);
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file("/nonexistent/settings.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [ocr]
            languages = "eng"
            pdf_dpi = 150
            "#
        )
        .unwrap();
        file.flush().unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.ocr.languages, "eng");
        assert_eq!(config.ocr.pdf_dpi, 150);
    }
}
