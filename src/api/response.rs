//! Response types for the roster API.
//!
//! This module defines the success payload, the error response structures,
//! and the mapping from [`RosterError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::export::RosterTable;
use crate::models::Roster;

/// Successful roster payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    /// Raw per-day name lists, Monday first.
    pub roster: Roster,
    /// Number of rows that made it into the roster.
    pub admitted_rows: usize,
    /// The roster rendered with the server's labels.
    pub table: RosterTable,
}

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
    /// Creates a `400 Bad Request` response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RosterError> for ApiErrorResponse {
    fn from(error: RosterError) -> Self {
        let message = error.to_string();
        match error {
            RosterError::MissingColumns { columns } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "MISSING_COLUMNS",
                    message,
                    format!("Required columns not found: {}", columns.join(", ")),
                ),
            ),
            RosterError::InvalidCellValue { row, column, .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_CELL_VALUE",
                    message,
                    format!("Row {} column '{}' must hold a known shift code", row, column),
                ),
            ),
            RosterError::TooManyEmployees { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("TOO_MANY_EMPLOYEES", message))
            }
            RosterError::MalformedInput { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("MALFORMED_INPUT", message))
            }
            RosterError::ConfigNotFound { .. }
            | RosterError::ConfigParseError { .. }
            | RosterError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            RosterError::ExportError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_ERROR", "Export failed", message),
            },
        }
    }
}
