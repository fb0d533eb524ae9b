//! Response types for the hours engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an invalid date error response.
    pub fn invalid_date(value: &str) -> Self {
        Self::with_details(
            "INVALID_DATE",
            format!("Invalid date: {}", value),
            "Dates must be given as YYYY-MM-DD",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            // Request inputs are parsed before the engine runs, so a bad time
            // here was already in the store.
            EngineError::InvalidTime { value, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_TIME",
                    format!("Invalid time '{}': {}", value, message),
                    "A stored report contains a time that is not HH:MM",
                ),
            },
            EngineError::InvalidMonth { year, month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid month {} for year {}", month, year),
                    "Months are zero-based: 0 is January and 11 is December",
                ),
            },
            EngineError::ReportNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("REPORT_NOT_FOUND", format!("Report not found: {}", id)),
            },
            EngineError::StoreError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Report store error",
                    format!("{}: {}", path, message),
                ),
            },
            EngineError::SyncDisabled => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("SYNC_DISABLED", "Synchronisation is not enabled"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_invalid_date_error() {
        let error = ApiError::invalid_date("2025-13-01");
        assert_eq!(error.code, "INVALID_DATE");
        assert!(error.message.contains("2025-13-01"));
        assert!(error.details.is_some());
    }

    #[test]
    fn test_engine_error_status_codes() {
        let cases = vec![
            (
                EngineError::InvalidMonth {
                    year: 2025,
                    month: 12,
                },
                StatusCode::BAD_REQUEST,
                "INVALID_MONTH",
            ),
            (
                EngineError::InvalidTime {
                    value: "8".to_string(),
                    message: "expected HH:MM".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
                "INVALID_TIME",
            ),
            (
                EngineError::ReportNotFound {
                    id: "r1".to_string(),
                },
                StatusCode::NOT_FOUND,
                "REPORT_NOT_FOUND",
            ),
            (
                EngineError::SyncDisabled,
                StatusCode::CONFLICT,
                "SYNC_DISABLED",
            ),
            (
                EngineError::StoreError {
                    path: "reports.json".to_string(),
                    message: "denied".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_ERROR",
            ),
        ];

        for (engine_error, status, code) in cases {
            let api_error: ApiErrorResponse = engine_error.into();
            assert_eq!(api_error.status, status);
            assert_eq!(api_error.error.code, code);
        }
    }
}
