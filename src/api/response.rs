//! Response types for the report API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
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

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ReportError> for ApiErrorResponse {
    fn from(error: ReportError) -> Self {
        let status = match &error {
            ReportError::UnknownReportKind { .. } | ReportError::InvalidDateRange { .. } => {
                StatusCode::BAD_REQUEST
            }
            ReportError::RoundingInvariant { .. }
            | ReportError::Query { .. }
            | ReportError::Document { .. }
            | ReportError::SettingsNotFound { .. }
            | ReportError::SettingsParse { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let code = match &error {
            ReportError::RoundingInvariant { .. } => "COMPUTATION_ERROR",
            ReportError::UnknownReportKind { .. } => "UNKNOWN_REPORT_KIND",
            ReportError::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            ReportError::Query { .. } => "QUERY_ERROR",
            ReportError::Document { .. } => "DOCUMENT_ERROR",
            ReportError::SettingsNotFound { .. } | ReportError::SettingsParse { .. } => {
                "SETTINGS_ERROR"
            }
        };

        ApiErrorResponse {
            status,
            error: ApiError::new(code, error.to_string()),
        }
    }
}
