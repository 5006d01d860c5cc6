//! Response types for the Attendance Engine API.
//!
//! This module defines the JSON views of attendance records, the response
//! envelopes, and the error response structures for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    AttendanceStatus, DailyAttendance, DayAttendanceReport, PunchRow, RangeAttendance,
    RangeAttendanceReport,
};

/// One row of the single-day attendance response. Every field is display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAttendanceView {
    /// Employee code.
    #[serde(rename = "emp_code")]
    pub emp_code: String,
    /// Name, or "-".
    pub name: String,
    /// Abbreviated weekday, or "-".
    pub day: String,
    /// Login clock time, or "-".
    pub login: String,
    /// Logout clock time, or "-".
    pub logout: String,
    /// Worked duration as "Xh Ym".
    pub working_hours: String,
    /// Overtime as "Xh Ym".
    pub overtime: String,
}

impl From<&DailyAttendance> for DayAttendanceView {
    fn from(record: &DailyAttendance) -> Self {
        Self {
            emp_code: record.employee_code.clone(),
            name: record.name_label().to_string(),
            day: record.day_label(),
            login: record.login_label(),
            logout: record.logout_label(),
            working_hours: record.working_hours(),
            overtime: record.overtime(),
        }
    }
}

/// One row of the range attendance response.
///
/// Absent clock times are `null` here rather than "-".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeAttendanceView {
    /// Employee code.
    #[serde(rename = "emp_code")]
    pub emp_code: String,
    /// Name, or "-".
    pub name: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Abbreviated weekday.
    pub day: String,
    /// Login clock time.
    pub login: Option<String>,
    /// Logout clock time.
    pub logout: Option<String>,
    /// Worked duration as "Xh Ym".
    pub working_hours: String,
    /// Worked duration in minutes.
    pub working_minutes: u32,
    /// Overtime as "Xh Ym".
    pub overtime: String,
    /// Overtime in minutes.
    pub overtime_minutes: u32,
    /// Presence classification.
    pub status: AttendanceStatus,
}

impl From<&RangeAttendance> for RangeAttendanceView {
    fn from(record: &RangeAttendance) -> Self {
        Self {
            emp_code: record.employee_code.clone(),
            name: record.name_label().to_string(),
            date: record.date,
            day: record.day.to_string(),
            login: record.login.map(|t| t.format("%H:%M").to_string()),
            logout: record.logout.map(|t| t.format("%H:%M").to_string()),
            working_hours: record.working_hours(),
            working_minutes: record.worked_minutes,
            overtime: record.overtime(),
            overtime_minutes: record.overtime_minutes,
            status: record.status,
        }
    }
}

/// Body of `GET /api/attendance/day`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAttendanceResponse {
    /// Always true on success.
    pub success: bool,
    /// The requested date.
    pub date: NaiveDate,
    /// Number of rows in `attendance`.
    pub total_employees: usize,
    /// One row per employee with punches on the date.
    pub attendance: Vec<DayAttendanceView>,
}

impl From<&DayAttendanceReport> for DayAttendanceResponse {
    fn from(report: &DayAttendanceReport) -> Self {
        Self {
            success: true,
            date: report.date,
            total_employees: report.total_employees,
            attendance: report.attendance.iter().map(Into::into).collect(),
        }
    }
}

/// Body of `GET /api/attendance/week`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeAttendanceResponse {
    /// Always true on success.
    pub success: bool,
    /// First date, inclusive.
    pub start_date: NaiveDate,
    /// Last date, inclusive.
    pub end_date: NaiveDate,
    /// Number of rows in `attendance`.
    pub total_records: usize,
    /// One row per employee and date.
    pub attendance: Vec<RangeAttendanceView>,
}

impl From<&RangeAttendanceReport> for RangeAttendanceResponse {
    fn from(report: &RangeAttendanceReport) -> Self {
        Self {
            success: true,
            start_date: report.start_date,
            end_date: report.end_date,
            total_records: report.total_records,
            attendance: report.attendance.iter().map(Into::into).collect(),
        }
    }
}

/// One entry of `GET /api/transactions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionSummary {
    /// Employee code.
    pub emp_code: String,
    /// Wall-clock punch time.
    pub punch_time: chrono::NaiveDateTime,
}

impl From<PunchRow> for TransactionSummary {
    fn from(row: PunchRow) -> Self {
        Self {
            emp_code: row.emp_code,
            punch_time: row.punch_time,
        }
    }
}

/// Body of `GET /api/merged-transactions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    /// Effective page number.
    pub page: usize,
    /// Effective page size.
    pub limit: usize,
    /// Rows in the whole store.
    pub total_records: usize,
    /// Rows on this page, newest first.
    pub data: Vec<PunchRow>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok".
    pub status: String,
    /// Crate version.
    pub version: String,
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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
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

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::MissingParameter { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", error.to_string()),
            },
            EngineError::PunchDataNotFound { .. }
            | EngineError::PunchDataParseError { .. }
            | EngineError::InvalidPunch { .. }
            | EngineError::DataSource { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATA_SOURCE_ERROR",
                    "Internal Server Error",
                    error.to_string(),
                ),
            },
        }
    }
}
