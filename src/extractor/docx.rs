use crate::extractor::{SourceKind, TextSource};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// DOCX routine: read body paragraphs in document order and join them with
/// newline separators. Tables, headers/footers, and embedded objects are
/// ignored.
pub struct DocxSource {
    path: PathBuf,
}

impl DocxSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl TextSource for DocxSource {
    async fn extract_impl(&self) -> Result<String> {
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || -> Result<String> {
            use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

            let data = std::fs::read(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;

            let docx =
                read_docx(&data).map_err(|e| anyhow::anyhow!("failed to parse DOCX: {e}"))?;

            // Empty paragraphs are kept here; blank-line stripping is a
            // separate, configurable normalization step
            let mut paragraphs = Vec::new();
            for child in docx.document.children.iter() {
                if let DocumentChild::Paragraph(para) = child {
                    let mut line = String::new();
                    for para_child in para.children.iter() {
                        if let ParagraphChild::Run(run) = para_child {
                            for run_child in run.children.iter() {
                                if let RunChild::Text(text) = run_child {
                                    line.push_str(&text.text);
                                }
                            }
                        }
                    }
                    paragraphs.push(line);
                }
            }

            Ok(paragraphs.join("\n"))
        })
        .await?
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Docx
    }
}
