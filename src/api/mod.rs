//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST endpoints for browsing raw punches and for
//! daily and date-range attendance, as JSON or as text report downloads.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{build_day_report, build_range_report, create_router, LATEST_TRANSACTIONS_LIMIT};
pub use request::{DayQuery, PageQuery, RangeQuery, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use response::{
    ApiError, DayAttendanceResponse, DayAttendanceView, HealthResponse, RangeAttendanceResponse,
    RangeAttendanceView, TransactionPage, TransactionSummary,
};
pub use state::AppState;
