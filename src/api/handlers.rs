//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.
//! Handlers fetch punch rows from the configured [`PunchSource`](crate::source::PunchSource),
//! classify them by device alias, run the aggregators and shape the result.

use std::time::Instant;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate_day, aggregate_range};
use crate::error::EngineResult;
use crate::models::{DayAttendanceReport, PunchEvent, RangeAttendanceReport};
use crate::report::{
    day_report_filename, range_report_filename, render_day_report, render_range_report,
};

use super::request::{DayQuery, PageQuery, RangeQuery};
use super::response::{
    ApiError, ApiErrorResponse, DayAttendanceResponse, HealthResponse, RangeAttendanceResponse,
    TransactionPage, TransactionSummary,
};
use super::state::AppState;

/// Rows returned by `GET /api/transactions`.
pub const LATEST_TRANSACTIONS_LIMIT: usize = 100;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/transactions", get(transactions_handler))
        .route("/api/face-system", get(employees_handler))
        .route("/api/merged-transactions", get(merged_transactions_handler))
        .route("/api/attendance/day", get(attendance_day_handler))
        .route("/api/attendance/week", get(attendance_week_handler))
        .route("/api/report/day", get(report_day_handler))
        .route("/api/report/week", get(report_week_handler))
        .with_state(state)
}

/// Builds the single-day attendance report from the store.
pub fn build_day_report(state: &AppState, date: NaiveDate) -> EngineResult<DayAttendanceReport> {
    let config = state.config();
    let rows = state.source().punches_on(date)?;
    let punches = PunchEvent::from_rows(&rows, config.devices());
    let attendance = aggregate_day(&punches, config.policy());
    Ok(DayAttendanceReport::new(date, attendance))
}

/// Builds the date-range attendance report from the store.
pub fn build_range_report(
    state: &AppState,
    start: NaiveDate,
    end: NaiveDate,
) -> EngineResult<RangeAttendanceReport> {
    let config = state.config();
    let rows = state.source().punches_between(start, end)?;
    let punches = PunchEvent::from_rows(&rows, config.devices());
    let attendance = aggregate_range(&punches, config.policy());
    Ok(RangeAttendanceReport::new(start, end, attendance))
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: impl Into<ApiErrorResponse>) -> Response {
    let api_error: ApiErrorResponse = err.into();
    warn!(
        correlation_id = %correlation_id,
        status = api_error.status.as_u16(),
        code = %api_error.error.code,
        message = %api_error.error.message,
        "Request failed"
    );
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn text_attachment(filename: &str, body: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

/// Turns a query-string rejection into a validation error.
fn rejection_error(rejection: QueryRejection) -> ApiErrorResponse {
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error: ApiError::validation_error(rejection.body_text()),
    }
}

/// Handler for GET /health.
async fn health_handler() -> Response {
    json_ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for GET /api/transactions.
///
/// Returns the most recent punches, newest first.
async fn transactions_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing latest transactions");

    match state.source().latest_transactions(LATEST_TRANSACTIONS_LIMIT) {
        Ok(rows) => {
            let body: Vec<TransactionSummary> = rows.into_iter().map(Into::into).collect();
            json_ok(body)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /api/face-system.
///
/// Returns the employee directory.
async fn employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing employees");

    match state.source().employees() {
        Ok(employees) => json_ok(employees),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /api/merged-transactions.
///
/// Returns one page of punches joined with employee names.
async fn merged_transactions_handler(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return error_response(correlation_id, rejection_error(rejection)),
    };
    info!(
        correlation_id = %correlation_id,
        page = query.page(),
        limit = query.limit(),
        "Listing merged transactions"
    );

    let source = state.source();
    let page = source
        .transactions_page(query.offset(), query.limit())
        .and_then(|data| {
            Ok(TransactionPage {
                page: query.page(),
                limit: query.limit(),
                total_records: source.transaction_count()?,
                data,
            })
        });

    match page {
        Ok(page) => json_ok(page),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /api/attendance/day.
///
/// Aggregates one row per employee with punches on `date`.
async fn attendance_day_handler(
    State(state): State<AppState>,
    query: Result<Query<DayQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily attendance request");

    let date = match query {
        Ok(Query(query)) => match query.require_date() {
            Ok(date) => date,
            Err(err) => return error_response(correlation_id, err),
        },
        Err(rejection) => return error_response(correlation_id, rejection_error(rejection)),
    };

    let start_time = Instant::now();
    match build_day_report(&state, date) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                date = %date,
                employees = report.total_employees,
                duration_us = start_time.elapsed().as_micros(),
                "Daily attendance completed"
            );
            json_ok(DayAttendanceResponse::from(&report))
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /api/attendance/week.
///
/// Aggregates one row per (employee, date) between `start` and `end`.
async fn attendance_week_handler(
    State(state): State<AppState>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing range attendance request");

    let (start, end) = match query {
        Ok(Query(query)) => match query.require_range() {
            Ok(range) => range,
            Err(err) => return error_response(correlation_id, err),
        },
        Err(rejection) => return error_response(correlation_id, rejection_error(rejection)),
    };

    let start_time = Instant::now();
    match build_range_report(&state, start, end) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                start = %start,
                end = %end,
                records = report.total_records,
                duration_us = start_time.elapsed().as_micros(),
                "Range attendance completed"
            );
            json_ok(RangeAttendanceResponse::from(&report))
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /api/report/day.
///
/// Same data as the daily attendance endpoint, rendered as a text download.
async fn report_day_handler(
    State(state): State<AppState>,
    query: Result<Query<DayQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Rendering daily report");

    let date = match query {
        Ok(Query(query)) => match query.require_date() {
            Ok(date) => date,
            Err(err) => return error_response(correlation_id, err),
        },
        Err(rejection) => return error_response(correlation_id, rejection_error(rejection)),
    };

    match build_day_report(&state, date) {
        Ok(report) => {
            let text = render_day_report(&report, state.config().report());
            text_attachment(&day_report_filename(&report), text)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /api/report/week.
async fn report_week_handler(
    State(state): State<AppState>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Rendering range report");

    let (start, end) = match query {
        Ok(Query(query)) => match query.require_range() {
            Ok(range) => range,
            Err(err) => return error_response(correlation_id, err),
        },
        Err(rejection) => return error_response(correlation_id, rejection_error(rejection)),
    };

    match build_range_report(&state, start, end) {
        Ok(report) => {
            let text = render_range_report(&report, state.config().report());
            text_attachment(&range_report_filename(&report), text)
        }
        Err(err) => error_response(correlation_id, err),
    }
}
