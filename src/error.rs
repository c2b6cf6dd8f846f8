use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

use crate::utils::api_response::ResponseBuilder;

/// Startup configuration problems.
#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("PORT must be a number, got {0:?}")]
    InvalidPort(String),
}

/// Failures while talking to the storage/OCR backend.
#[derive(ThisError, Debug)]
pub enum BackendError {
    /// Backend answered with a non-2xx status; relayed to the caller as-is
    #[error("backend responded with status {0}")]
    Status(StatusCode),

    /// The request never produced a response
    #[error("backend request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Backend answered 2xx but the body was not JSON
    #[error("backend returned an unreadable body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        match self {
            BackendError::Status(status) => {
                tracing::warn!("Relaying backend status {}", status);
                ResponseBuilder::status(status).into_response()
            }
            other => {
                tracing::error!("Backend call failed: {}", other);
                ResponseBuilder::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                    .into_response()
            }
        }
    }
}

/// Client-side failures. The `Display` text is what the user sees.
#[derive(ThisError, Debug)]
pub enum ClientError {
    #[error("Please enter a valid image URL (jpg, png, webp)")]
    InvalidImageUrl,

    #[error("Something went wrong. Please try again.")]
    NothingToUpload,

    #[error("Could not read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Upload failed.")]
    UploadFailed,

    #[error("Server responded with status {0}")]
    ServerStatus(StatusCode),

    #[error("An error occurred during processing: {0}")]
    Request(#[from] reqwest::Error),
}
