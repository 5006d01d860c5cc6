//! In-memory punch store.
//!
//! Loads a JSON snapshot of the terminal database (employee directory plus
//! transactions), validates every timestamp against the wall-clock contract,
//! and answers the store queries from memory.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::PunchRow;

use super::wall_clock::parse_wall_clock;
use super::{EmployeeEntry, PunchSource};

#[derive(Debug, Deserialize)]
struct StoreSnapshot {
    #[serde(default)]
    employees: Vec<EmployeeEntry>,
    transactions: Vec<RawTransaction>,
}

#[derive(Debug, Deserialize)]
struct RawTransaction {
    emp_code: String,
    punch_time: String,
    terminal_alias: String,
}

/// A read-only punch store held in memory.
///
/// # Example
///
/// ```
/// use attendance_engine::source::{MemoryPunchSource, PunchSource};
/// use chrono::NaiveDate;
///
/// let json = r#"{
///     "employees": [{"emp_code": "E1", "first_name": "Asha"}],
///     "transactions": [
///         {"emp_code": "E1", "punch_time": "2024-05-01T09:02:00Z", "terminal_alias": "In Device"}
///     ]
/// }"#;
/// let source = MemoryPunchSource::from_json(json, "inline").unwrap();
/// let rows = source.punches_on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()).unwrap();
/// assert_eq!(rows[0].first_name.as_deref(), Some("Asha"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryPunchSource {
    employees: Vec<EmployeeEntry>,
    rows: Vec<PunchRow>,
}

impl MemoryPunchSource {
    /// Creates a store from already-joined rows.
    pub fn new(employees: Vec<EmployeeEntry>, rows: Vec<PunchRow>) -> Self {
        Self { employees, rows }
    }

    /// Loads a store snapshot from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::PunchDataNotFound {
            path: path_str.clone(),
        })?;

        let source = Self::from_json(&content, &path_str)?;
        info!(
            path = %path_str,
            employees = source.employees.len(),
            transactions = source.rows.len(),
            "Loaded punch store snapshot"
        );
        Ok(source)
    }

    /// Parses a store snapshot, joining names and validating timestamps.
    ///
    /// `origin` names the snapshot in error messages.
    pub fn from_json(json: &str, origin: &str) -> EngineResult<Self> {
        let snapshot: StoreSnapshot =
            serde_json::from_str(json).map_err(|e| EngineError::PunchDataParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        let rows = snapshot
            .transactions
            .into_iter()
            .map(|tx| {
                let punch_time =
                    parse_wall_clock(&tx.punch_time).map_err(|e| EngineError::InvalidPunch {
                        emp_code: tx.emp_code.clone(),
                        message: e.to_string(),
                    })?;
                let first_name = snapshot
                    .employees
                    .iter()
                    .find(|emp| emp.emp_code == tx.emp_code)
                    .and_then(|emp| emp.first_name.clone());
                Ok(PunchRow {
                    emp_code: tx.emp_code,
                    first_name,
                    punch_time,
                    terminal_alias: tx.terminal_alias,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Self::new(snapshot.employees, rows))
    }

    fn ordered_for_attendance<F>(&self, keep: F) -> Vec<PunchRow>
    where
        F: Fn(NaiveDate) -> bool,
    {
        let mut rows: Vec<PunchRow> = self
            .rows
            .iter()
            .filter(|row| keep(row.punch_time.date()))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            a.emp_code
                .cmp(&b.emp_code)
                .then(a.punch_time.cmp(&b.punch_time))
        });
        rows
    }

    fn newest_first(&self) -> Vec<&PunchRow> {
        let mut rows: Vec<&PunchRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| b.punch_time.cmp(&a.punch_time));
        rows
    }
}

impl PunchSource for MemoryPunchSource {
    fn punches_on(&self, date: NaiveDate) -> EngineResult<Vec<PunchRow>> {
        Ok(self.ordered_for_attendance(|d| d == date))
    }

    fn punches_between(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Vec<PunchRow>> {
        Ok(self.ordered_for_attendance(|d| d >= start && d <= end))
    }

    fn latest_transactions(&self, limit: usize) -> EngineResult<Vec<PunchRow>> {
        Ok(self
            .newest_first()
            .into_iter()
            .take(limit)
            .cloned()
            .collect())
    }

    fn transactions_page(&self, offset: usize, limit: usize) -> EngineResult<Vec<PunchRow>> {
        Ok(self
            .newest_first()
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    fn transaction_count(&self) -> EngineResult<usize> {
        Ok(self.rows.len())
    }

    fn employees(&self) -> EngineResult<Vec<EmployeeEntry>> {
        let mut employees = self.employees.clone();
        employees.sort_by(|a, b| b.emp_code.cmp(&a.emp_code));
        Ok(employees)
    }
}
