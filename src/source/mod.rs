//! Data access for punch rows.
//!
//! The aggregators never talk to a store. Request handlers fetch rows through
//! a [`PunchSource`], classify them with the configured aliases, and hand the
//! resulting punch events to the engine. Store failures surface here as
//! [`EngineError::DataSource`](crate::error::EngineError::DataSource) and
//! never reach the aggregation code.

mod memory;
mod wall_clock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::PunchRow;

pub use memory::MemoryPunchSource;
pub use wall_clock::{WallClockError, parse_wall_clock};

/// An entry in the employee directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeEntry {
    /// Employee code as recorded by the terminals.
    pub emp_code: String,
    /// First name, if recorded.
    #[serde(default)]
    pub first_name: Option<String>,
}

/// Queries the engine needs from the punch store.
///
/// Attendance queries return rows ordered by employee code, then punch time.
pub trait PunchSource: Send + Sync {
    /// Rows punched on `date`.
    fn punches_on(&self, date: NaiveDate) -> EngineResult<Vec<PunchRow>>;

    /// Rows punched between `start` and `end`, inclusive.
    fn punches_between(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Vec<PunchRow>>;

    /// The `limit` most recent rows, newest first.
    fn latest_transactions(&self, limit: usize) -> EngineResult<Vec<PunchRow>>;

    /// A page of rows, newest first.
    fn transactions_page(&self, offset: usize, limit: usize) -> EngineResult<Vec<PunchRow>>;

    /// Total number of rows in the store.
    fn transaction_count(&self) -> EngineResult<usize>;

    /// The employee directory, by code descending.
    fn employees(&self) -> EngineResult<Vec<EmployeeEntry>>;
}
