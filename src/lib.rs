pub mod config;
pub mod constants;
pub mod extractor;
pub mod models;
pub mod normalize;
pub mod ocr;
pub mod server;
pub mod storage;

pub use config::Config;
pub use extractor::{ExtractorFactory, SourceKind, TextSource};
pub use models::{ExtractResponse, UploadMeta};
pub use ocr::OcrEngine;
pub use storage::UploadStore;
