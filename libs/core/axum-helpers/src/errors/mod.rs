pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Body of every error response.
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "User not found"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
        }
    }
}

/// Build a JSON error response directly, for middleware that cannot return `AppError`.
pub fn error_response(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(code, message))).into_response()
}

/// HTTP-facing error. Domain crates choose the variant; this type owns the
/// status code and body shape.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    /// Any failure to decode a JSON body, whatever the cause.
    #[error("Invalid request body: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Missing API key")]
    MissingApiKey,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_)
            | AppError::MissingParameter(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MissingApiKey | AppError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::JsonExtractorRejection(_) => ErrorCode::InvalidBody,
            AppError::MissingParameter(_) => ErrorCode::MissingParameter,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::MissingApiKey => ErrorCode::MissingApiKey,
            AppError::InvalidApiKey => ErrorCode::InvalidApiKey,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
            AppError::ServiceUnavailable(_) => ErrorCode::ServiceUnavailable,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        let message = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = code.code(), rejection = %e.body_text(), "JSON extraction error");
                code.default_message().to_string()
            }
            AppError::MissingApiKey | AppError::InvalidApiKey => {
                tracing::warn!(error_code = code.code(), "API key rejected");
                code.default_message().to_string()
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                msg
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(error_code = code.code(), "Service unavailable: {}", msg);
                msg
            }
            AppError::MissingParameter(msg) | AppError::BadRequest(msg) | AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "{}", msg);
                msg
            }
        };

        error_response(status, code, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_bad_request_keeps_message() {
        let (status, body) = render(AppError::BadRequest("name required".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "name required");
        assert_eq!(body["error"], "BAD_REQUEST");
        assert_eq!(body["code"], 1003);
    }

    #[tokio::test]
    async fn test_api_key_errors_are_unauthorized() {
        let (status, body) = render(AppError::MissingApiKey).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "MISSING_API_KEY");

        let (status, body) = render(AppError::InvalidApiKey).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "INVALID_API_KEY");
    }

    #[tokio::test]
    async fn test_internal_error_status() {
        let (status, body) = render(AppError::InternalServerError("user not found".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "user not found");
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let (status, body) = render(AppError::NotFound("User not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
