/// Error types for Thumbnail Service
///
/// This module defines all error types that can occur in the pipeline.
/// Errors are converted to appropriate HTTP responses for API clients;
/// no failure is allowed to escape without producing a response.
use crate::models::ErrorResponse;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::fmt;

/// Result type for thumbnail-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Malformed request (invalid or unparseable image URL)
    BadRequest(String),

    /// File extension does not match a supported codec
    UnsupportedFormat(String),

    /// Network/HTTP failure retrieving the source image
    FetchFailed(String),

    /// Fetched bytes are not a valid image
    DecodeFailed(String),

    /// Re-encoding the resized image failed
    EncodeFailed(String),

    /// Configured target width is degenerate for this source image
    Configuration(String),

    /// Internal server error
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::UnsupportedFormat(msg) => write!(f, "Unsupported format: {}", msg),
            AppError::FetchFailed(msg) => write!(f, "Fetch failed: {}", msg),
            AppError::DecodeFailed(msg) => write!(f, "Decode failed: {}", msg),
            AppError::EncodeFailed(msg) => write!(f, "Encode failed: {}", msg),
            AppError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_)
            | AppError::UnsupportedFormat(_)
            | AppError::FetchFailed(_)
            | AppError::DecodeFailed(_) => StatusCode::BAD_REQUEST,
            AppError::EncodeFailed(_) | AppError::Configuration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let (error_type, code) = match self {
            AppError::BadRequest(_) => ("validation_error", "INVALID_REQUEST"),
            AppError::UnsupportedFormat(_) => ("validation_error", "UNSUPPORTED_FORMAT"),
            AppError::FetchFailed(_) => ("upstream_error", "FETCH_FAILED"),
            AppError::DecodeFailed(_) => ("validation_error", "DECODE_FAILED"),
            AppError::EncodeFailed(_) => ("server_error", "ENCODE_FAILED"),
            AppError::Configuration(_) => ("server_error", "INVALID_TARGET_WIDTH"),
            AppError::Internal(_) => ("server_error", "INTERNAL_SERVER_ERROR"),
        };

        let message = self.to_string();
        let response = ErrorResponse::new(
            match status {
                StatusCode::BAD_REQUEST => "Bad Request",
                StatusCode::INTERNAL_SERVER_ERROR => "Internal Server Error",
                _ => "Error",
            },
            &message,
            status.as_u16(),
            error_type,
            code,
        );

        HttpResponse::build(status).json(response)
    }
}
