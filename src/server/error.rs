use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

/// Transport-level errors returned by the HTTP surface.
///
/// Unsupported file types are deliberately not represented here: they are a
/// normal response carrying a marker, never an error.
#[derive(ThisError, Debug)]
pub enum ApiError {
    /// Malformed upload request (bad multipart data, missing file field)
    #[error("{message}")]
    BadRequest { message: String },

    /// An extraction routine failed and the error policy is `propagate`
    #[error(transparent)]
    Extraction(anyhow::Error),

    /// Unexpected error with full context chain (storage, I/O)
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Extraction(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-safe message, without leaking internal details
    pub fn user_message(&self) -> String {
        match self {
            ApiError::BadRequest { message } => message.clone(),
            ApiError::Extraction(_) | ApiError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Extraction(_) | ApiError::Internal(_) => {
                tracing::error!("request failed: {:#}", self);
            }
            ApiError::BadRequest { .. } => {
                tracing::debug!("client error: {}", self);
            }
        }

        (self.status_code(), self.user_message()).into_response()
    }
}

/// Type alias for handler results
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let bad = ApiError::BadRequest {
            message: "missing field".to_string(),
        };
        assert_eq!(bad.status_code(), StatusCode::BAD_REQUEST);

        let extraction = ApiError::Extraction(anyhow::anyhow!("tesseract exited with 1"));
        assert_eq!(extraction.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let internal = ApiError::Internal(anyhow::anyhow!("disk full"));
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_details_not_leaked() {
        let extraction = ApiError::Extraction(anyhow::anyhow!("tesseract exited with 1"));
        assert_eq!(extraction.user_message(), "Internal server error");

        let bad = ApiError::BadRequest {
            message: "missing required field: 'file'".to_string(),
        };
        assert_eq!(bad.user_message(), "missing required field: 'file'");
    }
}
