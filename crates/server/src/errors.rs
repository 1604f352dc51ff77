use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use filewise::{MetadataError, StoreError};
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// Encapsulates the kinds of errors that can occur within the server,
/// allowing them to be converted into appropriate HTTP responses.
pub enum AppError {
    /// The request itself was invalid (e.g., no content to analyze).
    BadRequest(String),
    /// Errors originating from the metadata pipeline.
    Metadata(MetadataError),
    /// Errors originating from the workspace store.
    Store(StoreError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<MetadataError> for AppError {
    fn from(err: MetadataError) -> Self {
        AppError::Metadata(err)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Metadata(err) => {
                error!("MetadataError: {err:?}");
                match err {
                    MetadataError::AiRequest(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Request to AI provider failed: {e}"),
                    ),
                    MetadataError::AiDeserialization(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Failed to deserialize AI provider response: {e}"),
                    ),
                    MetadataError::AiApi(e) => {
                        (StatusCode::BAD_GATEWAY, format!("AI provider error: {e}"))
                    }
                    MetadataError::MissingAiProvider(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Server is not configured correctly.".to_string(),
                    ),
                    MetadataError::ReqwestClientBuild(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Failed to build HTTP client: {e}"),
                    ),
                }
            }
            AppError::Store(err) => match err {
                StoreError::FileNotFound(id) => {
                    (StatusCode::NOT_FOUND, format!("File not found: {id}"))
                }
                StoreError::FolderNotFound(id) => {
                    (StatusCode::NOT_FOUND, format!("Folder not found: {id}"))
                }
                StoreError::NoContent(_) => {
                    (StatusCode::BAD_REQUEST, "No content provided".to_string())
                }
                StoreError::Metadata(e) => return AppError::Metadata(e).into_response(),
                other => {
                    error!("StoreError: {other:?}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal server error occurred.".to_string(),
                    )
                }
            },
            AppError::Internal(err) => {
                error!("Internal server error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
