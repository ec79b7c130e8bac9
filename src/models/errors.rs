//! Centralized Error Handling Module
//!
//! Every failure that can reach a client flows through [`AppError`] and
//! carries a unique [`ErrorCode`]. The code decides the HTTP status; the
//! message becomes the `detail` field of the JSON error body.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - UPSTREAM_xxx: primary provider (CoinGecko) failures
//! - API_xxx: request validation and lookup errors

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use tracing::{error, warn};

use crate::utils::constants::{MSG_NO_MATCHES, MSG_RATE_LIMITED};

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message, returned to the client as `detail`
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Primary provider returned HTTP 429
    UpstreamRateLimited,
    /// Primary provider failed (non-2xx, transport, timeout, bad body)
    UpstreamError,
    /// Lookup produced no results
    ApiNotFound,
    /// Query string or body failed validation
    ApiInvalidParameter,
    /// Anything else
    ApiInternalError,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpstreamRateLimited => "UPSTREAM_RATE_LIMITED",
            Self::UpstreamError => "UPSTREAM_ERROR",
            Self::ApiNotFound => "API_NOT_FOUND",
            Self::ApiInvalidParameter => "API_INVALID_PARAMETER",
            Self::ApiInternalError => "API_INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::UpstreamRateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::UpstreamError => StatusCode::BAD_GATEWAY,
            Self::ApiNotFound => StatusCode::NOT_FOUND,
            Self::ApiInvalidParameter => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ApiInternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// CoinGecko answered 429
    pub fn rate_limited() -> Self {
        Self::new(ErrorCode::UpstreamRateLimited, MSG_RATE_LIMITED)
    }

    /// Primary provider failure; `msg` is the underlying error text
    pub fn upstream(msg: impl fmt::Display) -> Self {
        Self::new(ErrorCode::UpstreamError, format!("Upstream API error: {}", msg))
    }

    /// Search returned no coins
    pub fn no_matches() -> Self {
        Self::new(ErrorCode::ApiNotFound, MSG_NO_MATCHES)
    }

    /// Validation failure
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiInvalidParameter, msg)
    }

    /// Internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiInternalError, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// HTTP rendering
// ============================================

/// JSON error body: `{"detail": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code.http_status();
        if status.is_server_error() {
            error!(code = self.code_str(), status = status.as_u16(), "{}", self.message);
        } else {
            warn!(code = self.code_str(), status = status.as_u16(), "{}", self.message);
        }
        (status, Json(ErrorBody { detail: self.message })).into_response()
    }
}

// ============================================
// Conversion from common error types
// ============================================

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else {
            err.to_string()
        };
        Self::with_source(ErrorCode::UpstreamError, format!("Upstream API error: {}", message), err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorCode::UpstreamError,
            format!("Upstream API error: invalid JSON body: {}", err),
            err,
        )
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::invalid_parameter(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_parameter(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::rate_limited();
        assert_eq!(err.code, ErrorCode::UpstreamRateLimited);
        assert_eq!(err.code_str(), "UPSTREAM_RATE_LIMITED");
        assert_eq!(err.message, MSG_RATE_LIMITED);
    }

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorCode::UpstreamRateLimited.http_status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(ErrorCode::UpstreamError.http_status(), StatusCode::BAD_GATEWAY);
        assert_eq!(ErrorCode::ApiNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::ApiInvalidParameter.http_status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_upstream_message_embeds_cause() {
        let err = AppError::upstream("HTTP 500 Internal Server Error");
        assert_eq!(err.message, "Upstream API error: HTTP 500 Internal Server Error");
        assert_eq!(err.to_string(), "[UPSTREAM_ERROR] Upstream API error: HTTP 500 Internal Server Error");
    }

    #[test]
    fn test_report_becomes_internal_error() {
        let err: AppError = eyre::eyre!("Invalid provider URL not a url").into();
        assert_eq!(err.code, ErrorCode::ApiInternalError);
        assert_eq!(err.message, "Invalid provider URL not a url");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::no_matches().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
