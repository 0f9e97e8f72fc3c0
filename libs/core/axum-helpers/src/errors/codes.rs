//! Error codes carried in every [`ErrorResponse`](super::ErrorResponse).
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::MissingApiKey;
//! assert_eq!(code.as_str(), "MISSING_API_KEY");
//! assert_eq!(code.code(), 1101);
//! ```

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1099)
    /// Body was not valid JSON for the target type
    InvalidBody,
    /// A required path or query parameter was empty
    MissingParameter,
    /// Request was rejected by domain rules
    BadRequest,
    NotFound,

    // Authentication (1100-1199)
    MissingApiKey,
    InvalidApiKey,

    // Server errors (1500-1599)
    InternalError,
    ServiceUnavailable,
    RequestTimeout,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidBody => "INVALID_BODY",
            Self::MissingParameter => "MISSING_PARAMETER",
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::MissingApiKey => "MISSING_API_KEY",
            Self::InvalidApiKey => "INVALID_API_KEY",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::RequestTimeout => "REQUEST_TIMEOUT",
        }
    }

    pub const fn code(&self) -> i32 {
        match self {
            Self::InvalidBody => 1001,
            Self::MissingParameter => 1002,
            Self::BadRequest => 1003,
            Self::NotFound => 1004,
            Self::MissingApiKey => 1101,
            Self::InvalidApiKey => 1102,
            Self::InternalError => 1500,
            Self::ServiceUnavailable => 1503,
            Self::RequestTimeout => 1504,
        }
    }

    pub const fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidBody => "Invalid request body",
            Self::MissingParameter => "A required parameter is missing",
            Self::BadRequest => "The request could not be processed",
            Self::NotFound => "The requested resource was not found",
            Self::MissingApiKey => "API key is required",
            Self::InvalidApiKey => "API key is invalid",
            Self::InternalError => "An unexpected error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::RequestTimeout => "Request timed out",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::InvalidApiKey).unwrap();
        assert_eq!(json, "\"INVALID_API_KEY\"");
        assert_eq!(ErrorCode::InvalidApiKey.to_string(), "INVALID_API_KEY");
    }

    #[test]
    fn test_codes_are_unique() {
        let all = [
            ErrorCode::InvalidBody,
            ErrorCode::MissingParameter,
            ErrorCode::BadRequest,
            ErrorCode::NotFound,
            ErrorCode::MissingApiKey,
            ErrorCode::InvalidApiKey,
            ErrorCode::InternalError,
            ErrorCode::ServiceUnavailable,
            ErrorCode::RequestTimeout,
        ];
        let mut codes: Vec<i32> = all.iter().map(ErrorCode::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }
}
