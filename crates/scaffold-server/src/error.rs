//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use scaffold_frames::FrameError;

/// Errors surfaced by request handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Frame document could not be built
    #[error("failed to load frame: {0}")]
    Frame(#[from] FrameError),

    /// Landing page could not be rendered
    #[error("failed to render page: {0}")]
    Page(#[from] minijinja::Error),
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let error = match self {
            ApiError::Frame(_) => "failed to load frame",
            ApiError::Page(_) => "failed to render page",
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: error.to_string(),
            }),
        )
            .into_response()
    }
}
