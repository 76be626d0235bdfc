//! Chatbot Guide error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Chatbot Guide error type
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed request body or socket message
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether the caller can fix this by changing the request
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Result type alias for Chatbot Guide operations
pub type Result<T> = std::result::Result<T, Error>;

/// JSON error body returned by the HTTP API: `{"message": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// HTTP-facing error carrying a status code and a client-safe message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        if err.is_validation() {
            Self::bad_request(err.to_string())
        } else {
            // Internal details stay in the log
            tracing::error!("Internal failure: {}", err);
            Self::internal("Internal server error")
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let api: ApiError = Error::Validation("query must not be empty".to_string()).into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert!(api.message.contains("query must not be empty"));
    }

    #[test]
    fn test_internal_hides_details() {
        let api: ApiError = Error::Internal("lock poisoned at 0xdead".to_string()).into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api.message.contains("0xdead"));
    }

    #[test]
    fn test_error_body_shape() {
        let json = serde_json::to_string(&ErrorBody {
            message: "Invalid request data".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"message":"Invalid request data"}"#);
    }
}
