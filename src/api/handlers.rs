//! HTTP request handlers for the roster API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::RosterResult;
use crate::export::{RosterTable, XLSX_CONTENT_TYPE, write_xlsx};
use crate::input::{ManualEntryForm, read_csv, read_xlsx};
use crate::models::{EmployeePreferenceRow, PreferenceTable};
use crate::roster::{aggregate, validate};

use super::request::TableRequest;
use super::response::{ApiError, ApiErrorResponse, RosterResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/roster", post(roster_handler))
        .route("/roster/upload", post(upload_handler))
        .route("/roster/manual", post(manual_handler))
        .route("/roster/export", post(export_handler))
        .route("/roster/upload/export", post(upload_export_handler))
        .route("/roster/manual/export", post(manual_export_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Handler for POST /roster.
///
/// Validates a JSON preference table and returns the roster.
async fn roster_handler(
    State(state): State<AppState>,
    payload: Result<Json<TableRequest>, JsonRejection>,
) -> Response {
    let start_time = Instant::now();
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing roster request");

    let table: PreferenceTable = match payload {
        Ok(Json(request)) => request.into(),
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let rows = validate(&table, state.labels());
    respond_with_roster(&state, correlation_id, start_time, rows)
}

/// Handler for POST /roster/upload.
///
/// Decodes an uploaded sheet, validates it and returns the roster.
async fn upload_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let start_time = Instant::now();
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        bytes = body.len(),
        "Processing roster upload"
    );

    let rows = decode_upload(&headers, &body).and_then(|table| validate(&table, state.labels()));
    respond_with_roster(&state, correlation_id, start_time, rows)
}

/// Handler for POST /roster/manual.
///
/// Converts a manual entry form into a roster. A form without any named
/// employee yields an empty roster.
async fn manual_handler(
    State(state): State<AppState>,
    payload: Result<Json<ManualEntryForm>, JsonRejection>,
) -> Response {
    let start_time = Instant::now();
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing manual roster form");

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let rows = manual_rows(&state, form, correlation_id);
    respond_with_roster(&state, correlation_id, start_time, rows)
}

/// Handler for POST /roster/export.
///
/// Validates a JSON preference table and returns the roster as an XLSX
/// attachment.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<TableRequest>, JsonRejection>,
) -> Response {
    let start_time = Instant::now();
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing roster export");

    let table: PreferenceTable = match payload {
        Ok(Json(request)) => request.into(),
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let rows = validate(&table, state.labels());
    respond_with_workbook(&state, correlation_id, start_time, rows)
}

/// Handler for POST /roster/upload/export.
///
/// Same input as POST /roster/upload, answered with an XLSX attachment.
async fn upload_export_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let start_time = Instant::now();
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        bytes = body.len(),
        "Processing roster upload export"
    );

    let rows = decode_upload(&headers, &body).and_then(|table| validate(&table, state.labels()));
    respond_with_workbook(&state, correlation_id, start_time, rows)
}

/// Handler for POST /roster/manual/export.
///
/// Same input as POST /roster/manual, answered with an XLSX attachment.
async fn manual_export_handler(
    State(state): State<AppState>,
    payload: Result<Json<ManualEntryForm>, JsonRejection>,
) -> Response {
    let start_time = Instant::now();
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing manual roster export");

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let rows = manual_rows(&state, form, correlation_id);
    respond_with_workbook(&state, correlation_id, start_time, rows)
}

/// Picks the decoder from the Content-Type: xlsx workbooks by their MIME
/// type, CSV otherwise.
fn decode_upload(headers: &HeaderMap, body: &[u8]) -> RosterResult<PreferenceTable> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if content_type.starts_with(XLSX_CONTENT_TYPE) {
        read_xlsx(body)
    } else {
        read_csv(body)
    }
}

fn manual_rows(
    state: &AppState,
    form: ManualEntryForm,
    correlation_id: Uuid,
) -> RosterResult<Vec<EmployeePreferenceRow>> {
    form.into_rows(state.limits()).inspect(|rows| {
        if rows.is_empty() {
            warn!(correlation_id = %correlation_id, "Manual form has no named employees");
        }
    })
}

/// Aggregates validated rows and builds the JSON response.
fn respond_with_roster(
    state: &AppState,
    correlation_id: Uuid,
    start_time: Instant,
    rows: RosterResult<Vec<EmployeePreferenceRow>>,
) -> Response {
    match rows {
        Ok(rows) => {
            let roster = aggregate(&rows);
            let table = RosterTable::render(&roster, state.labels());
            info!(
                correlation_id = %correlation_id,
                admitted_rows = rows.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Roster built successfully"
            );
            (
                StatusCode::OK,
                Json(RosterResponse {
                    roster,
                    admitted_rows: rows.len(),
                    table,
                }),
            )
                .into_response()
        }
        Err(err) => error_response(err.into(), correlation_id),
    }
}

/// Aggregates validated rows and returns the rendered roster as an XLSX
/// attachment.
fn respond_with_workbook(
    state: &AppState,
    correlation_id: Uuid,
    start_time: Instant,
    rows: RosterResult<Vec<EmployeePreferenceRow>>,
) -> Response {
    let labels = state.labels();
    let workbook = rows.and_then(|rows| {
        let rendered = RosterTable::render(&aggregate(&rows), labels);
        write_xlsx(&rendered, &labels.output.sheet_name)
    });

    match workbook {
        Ok(bytes) => {
            info!(
                correlation_id = %correlation_id,
                bytes = bytes.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Roster exported"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        content_disposition(&labels.output.file_name),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => error_response(err.into(), correlation_id),
    }
}

fn error_response(error: ApiErrorResponse, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        code = %error.error.code,
        message = %error.error.message,
        "Roster request failed"
    );
    error.into_response()
}

/// Maps a JSON extraction failure onto an API error.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            ApiError::malformed_json(format!("Invalid request body: {}", err.body_text()))
        }
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    error_response(ApiErrorResponse::bad_request(error), correlation_id)
}

/// Builds an attachment header that survives non-ASCII file names.
fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| if c.is_ascii_graphic() && c != '"' && c != '\\' { c } else { '_' })
        .collect();

    let mut encoded = String::with_capacity(file_name.len() * 3);
    for byte in file_name.bytes() {
        if byte.is_ascii_alphanumeric() || b"-._~".contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }

    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}
