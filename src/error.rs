//! Error types and error handling for the application
//!
//! Handlers return [`AppError`], which converts into a status code and a
//! plain-text body.

use crate::storage::StorageError;
use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Upload request carried no file under the `font` field
    #[error("No file uploaded.")]
    NoFileUploaded,

    /// Upload request carried more than one file under the `font` field
    #[error("Only one font file may be uploaded per request.")]
    MultipleFilesUploaded,

    /// Multipart body could not be read (malformed, or over the body limit)
    #[error("Invalid upload: {0}")]
    Multipart(#[from] MultipartError),

    /// Font name is unusable as a file name in the font directory
    #[error("Invalid font name: {0}")]
    InvalidFontName(String),

    /// Font with the given name was not found
    #[error("Font not found: {0}")]
    FontNotFound(String),

    /// The font directory does not exist yet
    #[error("Fonts directory not found.")]
    FontsDirectoryNotFound,

    /// The font directory exists but could not be read
    #[error("Error reading fonts directory.")]
    ListFailed(#[source] StorageError),

    /// Storage failure while reading or writing a font; the source is logged
    #[error("Font storage error.")]
    Storage(#[from] StorageError),
}

impl AppError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoFileUploaded => StatusCode::BAD_REQUEST,
            AppError::MultipleFilesUploaded => StatusCode::BAD_REQUEST,
            AppError::Multipart(e) => e.status(),
            AppError::InvalidFontName(_) => StatusCode::BAD_REQUEST,
            AppError::FontNotFound(_) => StatusCode::NOT_FOUND,
            AppError::FontsDirectoryNotFound => StatusCode::NOT_FOUND,
            AppError::ListFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NoFileUploaded.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::FontNotFound("a.ttf".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::FontsDirectoryNotFound.status(),
            StatusCode::NOT_FOUND
        );
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(
            AppError::ListFailed(StorageError::Io(io)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_match_wire_format() {
        assert_eq!(AppError::NoFileUploaded.to_string(), "No file uploaded.");
        assert_eq!(
            AppError::FontNotFound("a.ttf".to_string()).to_string(),
            "Font not found: a.ttf"
        );
        assert_eq!(
            AppError::FontsDirectoryNotFound.to_string(),
            "Fonts directory not found."
        );
    }
}
