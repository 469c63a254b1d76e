pub mod docx;
pub mod factory;
pub mod image;
pub mod pdf;
pub mod sheet;
pub mod r#trait;

pub use docx::DocxSource;
pub use factory::ExtractorFactory;
pub use image::ImageSource;
pub use pdf::PdfSource;
pub use r#trait::{SourceKind, TextSource};
pub use sheet::SheetSource;

use crate::config::ErrorPolicy;
use anyhow::Result;
use tracing::warn;

/// Run one extraction routine under the configured failure policy.
///
/// With [`ErrorPolicy::Embed`], a failure becomes a diagnostic string in the
/// returned text and the request still succeeds. With
/// [`ErrorPolicy::Propagate`], the failure is returned to the caller.
pub async fn run_with_policy(source: &dyn TextSource, policy: ErrorPolicy) -> Result<String> {
    match source.extract().await {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!(
                routine = source.kind().label(),
                path = %source.path().display(),
                error = %err,
                "extraction routine failed"
            );
            match policy {
                ErrorPolicy::Embed => Ok(format!("{}: {err:#}", source.kind().failure_prefix())),
                ErrorPolicy::Propagate => Err(err),
            }
        }
    }
}
