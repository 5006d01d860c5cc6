//! Query parameter types for the Attendance Engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default page for `/api/merged-transactions`.
pub const DEFAULT_PAGE: usize = 1;

/// Default page size for `/api/merged-transactions`.
pub const DEFAULT_LIMIT: usize = 10;

/// Query for single-day endpoints: `?date=YYYY-MM-DD`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayQuery {
    /// The date to aggregate.
    pub date: Option<NaiveDate>,
}

impl DayQuery {
    /// Returns the date or a `MissingParameter` error.
    pub fn require_date(&self) -> EngineResult<NaiveDate> {
        self.date.ok_or_else(|| EngineError::MissingParameter {
            message: "Date required (format: YYYY-MM-DD)".to_string(),
        })
    }
}

/// Query for range endpoints: `?start=YYYY-MM-DD&end=YYYY-MM-DD`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeQuery {
    /// First date, inclusive.
    pub start: Option<NaiveDate>,
    /// Last date, inclusive.
    pub end: Option<NaiveDate>,
}

impl RangeQuery {
    /// Returns both dates or a `MissingParameter` error.
    ///
    /// The order of the two dates is not checked; a reversed range simply
    /// matches no punches.
    pub fn require_range(&self) -> EngineResult<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(EngineError::MissingParameter {
                message: "Start and End dates required (format: YYYY-MM-DD)".to_string(),
            }),
        }
    }
}

/// Pagination query: `?page=N&limit=M`.
///
/// Values that are missing, unparsable or zero fall back to the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    /// 1-based page number.
    pub page: Option<String>,
    /// Page size.
    pub limit: Option<String>,
}

impl PageQuery {
    fn parse_or(value: Option<&str>, default: usize) -> usize {
        value
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(default)
    }

    /// The effective page number.
    pub fn page(&self) -> usize {
        Self::parse_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    /// The effective page size.
    pub fn limit(&self) -> usize {
        Self::parse_or(self.limit.as_deref(), DEFAULT_LIMIT)
    }

    /// Rows to skip for the effective page.
    pub fn offset(&self) -> usize {
        (self.page() - 1).saturating_mul(self.limit())
    }
}
