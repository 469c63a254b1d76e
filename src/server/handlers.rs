use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::info;

use crate::config::ResponseShape;
use crate::constants::UNSUPPORTED_TYPE_MESSAGE;
use crate::extractor::{self, ExtractorFactory};
use crate::models::ExtractResponse;
use crate::normalize;
use crate::server::error::{ApiError, Result};
use crate::server::AppState;

/// POST /extract-text
///
/// Accepts a multipart upload in the `file` field, persists it to the
/// working directory, dispatches to the matching extraction routine, and
/// returns the normalized, truncated text. Unsupported file types produce a
/// normal response carrying a marker, not an HTTP error.
pub async fn extract_text(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| ApiError::BadRequest {
        message: format!("failed to parse multipart data: {e}"),
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| ApiError::BadRequest {
                        message: "file field is missing a filename".to_string(),
                    })?;

                let bytes = field.bytes().await.map_err(|e| ApiError::BadRequest {
                    message: format!("failed to read file field: {e}"),
                })?;

                upload = Some((filename, bytes));
            }
            _ => {
                // Ignore unknown fields
            }
        }
    }

    let (filename, bytes) = upload.ok_or_else(|| ApiError::BadRequest {
        message: "missing required field: 'file'".to_string(),
    })?;

    info!(filename = %filename, size = bytes.len(), "received upload");

    // The upload lands on disk before dispatch, supported type or not
    let meta = state.store.save(&filename, &bytes).await?;

    let source = ExtractorFactory::create(meta.path.clone(), &filename, &state.ocr);

    let response = match source {
        Some(source) => {
            let outcome = extractor::run_with_policy(
                source.as_ref(),
                state.config.extraction.error_policy,
            )
            .await;

            // Retention applies whether or not the routine succeeded
            state.store.finish(&meta.path).await;

            let raw = outcome.map_err(ApiError::Extraction)?;
            let text = normalize::shape_output(&raw, &state.config.extraction);

            info!(
                filename = %filename,
                routine = source.kind().label(),
                chars = text.chars().count(),
                "extraction complete"
            );

            match state.config.server.response_shape {
                ResponseShape::Text => text.into_response(),
                ResponseShape::Structured => Json(ExtractResponse {
                    filename,
                    extracted_text: Some(text),
                    error: None,
                })
                .into_response(),
            }
        }
        None => {
            info!(filename = %filename, "unsupported file type");
            state.store.finish(&meta.path).await;

            match state.config.server.response_shape {
                ResponseShape::Text => UNSUPPORTED_TYPE_MESSAGE.into_response(),
                ResponseShape::Structured => Json(ExtractResponse {
                    filename,
                    extracted_text: None,
                    error: Some(UNSUPPORTED_TYPE_MESSAGE.to_string()),
                })
                .into_response(),
            }
        }
    };

    Ok(response)
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
