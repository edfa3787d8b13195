//! # HTTP API Errors
//!
//! Error types for the world API endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// No city matched the requested name
    #[error("No such city Name = {0}")]
    CityNotFound(String),

    /// No country matched the requested name.
    /// Reported as 400, not 404; existing clients depend on that code.
    #[error("No such country Name = {0}")]
    CountryNotFound(String),

    /// Request body failed to bind to the expected shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Backing store failure during query or insert
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::CityNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::CountryNotFound(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::CityNotFound("Atlantis".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::CountryNotFound("Wakanda".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidBody("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_message_names_missing_key() {
        let err = ApiError::CityNotFound("Atlantis".to_string());
        assert_eq!(err.to_string(), "No such city Name = Atlantis");
    }

    #[test]
    fn test_error_response_body() {
        let body = ErrorResponse::from(ApiError::CountryNotFound("Wakanda".to_string()));
        assert_eq!(body.code, 400);
        assert!(body.error.contains("Wakanda"));
    }
}
