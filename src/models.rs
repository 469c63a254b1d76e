use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Metadata about a single uploaded file, as seen by the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadMeta {
    /// Client-supplied filename, used only for extension dispatch
    pub filename: String,
    /// Upload size in bytes
    pub size: u64,
    /// Where the upload was persisted in the working directory
    pub path: PathBuf,
}

impl UploadMeta {
    /// Create a new UploadMeta instance
    pub fn new(filename: String, size: u64, path: PathBuf) -> Self {
        Self {
            filename,
            size,
            path,
        }
    }
}

/// JSON body returned by the upload endpoint when the structured
/// response shape is configured
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractResponse {
    pub filename: String,
    pub extracted_text: Option<String>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_meta_creation() {
        let meta = UploadMeta::new(
            "report.pdf".to_string(),
            1024,
            PathBuf::from("uploads/report.pdf"),
        );

        assert_eq!(meta.filename, "report.pdf");
        assert_eq!(meta.size, 1024);
        assert_eq!(meta.path, PathBuf::from("uploads/report.pdf"));
    }

    #[test]
    fn test_extract_response_serialization() {
        let response = ExtractResponse {
            filename: "memo.docx".to_string(),
            extracted_text: Some("hello".to_string()),
            error: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["filename"], "memo.docx");
        assert_eq!(json["extracted_text"], "hello");
        assert!(json["error"].is_null());
    }

    #[test]
    fn test_extract_response_unsupported_shape() {
        let response = ExtractResponse {
            filename: "notes.txt".to_string(),
            extracted_text: None,
            error: Some("Unsupported file type".to_string()),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["extracted_text"].is_null());
        assert_eq!(json["error"], "Unsupported file type");
    }
}
