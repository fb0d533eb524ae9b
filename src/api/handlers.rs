//! HTTP request handlers for the hours engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_daily_hours, calculate_monthly_hours, calculate_stats, get_overlap_warnings,
};
use crate::error::EngineError;
use crate::sync::build_sync_payload;

use super::request::{ImportRequest, StatsQuery, TechnicianQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/hours/daily/:date", get(daily_hours_handler))
        .route("/hours/monthly/:year/:month", get(monthly_hours_handler))
        .route("/warnings/:date", get(warnings_handler))
        .route("/stats", get(stats_handler))
        .route("/reports/import", post(import_handler))
        .route("/sync/payload", get(sync_payload_handler))
        .with_state(state)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn parse_date(correlation_id: Uuid, value: &str) -> Result<NaiveDate, Response> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        warn!(correlation_id = %correlation_id, date = %value, "Invalid date");
        ApiErrorResponse::bad_request(ApiError::invalid_date(value)).into_response()
    })
}

/// Handler for GET /hours/daily/:date.
async fn daily_hours_handler(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Processing daily hours request");

    let date = match parse_date(correlation_id, &date) {
        Ok(date) => date,
        Err(response) => return response,
    };

    let store = state.store().read().await;
    let snapshot = store.snapshot(&state.config().settings().technicians);

    let start_time = Instant::now();
    match calculate_daily_hours(&snapshot, date) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                technicians = result.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Daily hours calculated"
            );
            json_ok(result)
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /hours/monthly/:year/:month, `month` zero-based.
async fn monthly_hours_handler(
    State(state): State<AppState>,
    path: Result<Path<(i32, u32)>, PathRejection>,
    Query(query): Query<TechnicianQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let (year, month0) = match path {
        Ok(Path(parts)) => parts,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid path");
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            ))
            .into_response();
        }
    };
    info!(
        correlation_id = %correlation_id,
        year,
        month0,
        technician_id = ?query.technician_id,
        "Processing monthly hours request"
    );

    let store = state.store().read().await;
    let snapshot = store.snapshot(&state.config().settings().technicians);

    let start_time = Instant::now();
    match calculate_monthly_hours(&snapshot, year, month0, query.technician_id.as_deref()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                technicians = result.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Monthly hours calculated"
            );
            json_ok(result)
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /warnings/:date.
async fn warnings_handler(State(state): State<AppState>, Path(date): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Processing overlap warnings request");

    let date = match parse_date(correlation_id, &date) {
        Ok(date) => date,
        Err(response) => return response,
    };

    let store = state.store().read().await;
    let snapshot = store.snapshot(&state.config().settings().technicians);

    match get_overlap_warnings(&snapshot, date) {
        Ok(warnings) => json_ok(warnings),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /stats.
async fn stats_handler(State(state): State<AppState>, Query(query): Query<StatsQuery>) -> Response {
    let correlation_id = Uuid::new_v4();
    let today = query.today.unwrap_or_else(|| Local::now().date_naive());
    info!(
        correlation_id = %correlation_id,
        today = %today,
        technician_id = ?query.technician_id,
        "Processing stats request"
    );

    let store = state.store().read().await;
    let snapshot = store.snapshot(&state.config().settings().technicians);

    match calculate_stats(&snapshot, today, query.technician_id.as_deref()) {
        Ok(stats) => json_ok(stats),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for POST /reports/import.
///
/// Conflicts are resolved with the configured policy. Reports with a
/// malformed time are refused and counted as rejected.
async fn import_handler(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing import request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let policy = state.config().settings().sync.conflict_resolution;
    let received = request.reports.len();
    let summary = state
        .store()
        .write()
        .await
        .import_reports(request.reports, policy);

    info!(
        correlation_id = %correlation_id,
        received,
        imported = summary.imported,
        updated = summary.updated,
        skipped = summary.skipped,
        rejected = summary.rejected,
        "Import completed"
    );
    json_ok(summary)
}

/// Handler for GET /sync/payload.
async fn sync_payload_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing sync payload request");

    match build_sync_payload(state.config().settings()) {
        Ok(payload) => json_ok(payload),
        Err(err) => engine_error(correlation_id, err),
    }
}
