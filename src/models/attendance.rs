//! Attendance record models.
//!
//! This module contains the per-employee records produced by the daily and
//! range aggregators, together with the report envelopes that carry their
//! scope metadata. Presence of a login, logout or duration is modelled with
//! `Option`; the "-" and "0h 0m" sentinels are only produced by the label
//! accessors.

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::calculation::{format_label, format_minutes};

/// Presence status of an employee on one day of a range.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceStatus;
///
/// assert_eq!(AttendanceStatus::PartialNoLogout.to_string(), "Partial - No Logout");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// Both a login and a logout were recorded.
    #[serde(rename = "Present")]
    Present,
    /// Only a login was recorded.
    #[serde(rename = "Partial - No Logout")]
    PartialNoLogout,
    /// Only a logout was recorded.
    #[serde(rename = "Partial - No Login")]
    PartialNoLogin,
    /// Neither was recorded.
    #[serde(rename = "Absent")]
    Absent,
}

impl AttendanceStatus {
    /// Derives the status from which ends of the day are present.
    pub fn from_presence(has_login: bool, has_logout: bool) -> Self {
        match (has_login, has_logout) {
            (true, true) => AttendanceStatus::Present,
            (true, false) => AttendanceStatus::PartialNoLogout,
            (false, true) => AttendanceStatus::PartialNoLogin,
            (false, false) => AttendanceStatus::Absent,
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::PartialNoLogout => write!(f, "Partial - No Logout"),
            AttendanceStatus::PartialNoLogin => write!(f, "Partial - No Login"),
            AttendanceStatus::Absent => write!(f, "Absent"),
        }
    }
}

/// Grouping key for range aggregation: one employee on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeDay(pub String, pub NaiveDate);

impl EmployeeDay {
    /// The employee code.
    pub fn employee_code(&self) -> &str {
        &self.0
    }

    /// The calendar date.
    pub fn date(&self) -> NaiveDate {
        self.1
    }
}

/// One employee's attendance for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendance {
    /// Employee identifier.
    pub employee_code: String,
    /// First name observed for the employee in this request.
    pub employee_name: Option<String>,
    /// Weekday of the login punch.
    pub day: Option<Weekday>,
    /// Clock time of the chosen entry punch.
    pub login: Option<NaiveTime>,
    /// Clock time of the chosen exit punch.
    pub logout: Option<NaiveTime>,
    /// Minutes between login and logout. `None` unless both exist.
    pub worked_minutes: Option<u32>,
    /// Minutes past the office end time. `None` unless both ends exist.
    pub overtime_minutes: Option<u32>,
}

impl DailyAttendance {
    /// Display name, or "-" if unknown.
    pub fn name_label(&self) -> &str {
        self.employee_name.as_deref().unwrap_or("-")
    }

    /// Three-letter weekday, or "-" without a login.
    pub fn day_label(&self) -> String {
        self.day.map_or_else(|| "-".to_string(), |d| d.to_string())
    }

    /// "HH:MM" login, or "-".
    pub fn login_label(&self) -> String {
        format_label(self.login)
    }

    /// "HH:MM" logout, or "-".
    pub fn logout_label(&self) -> String {
        format_label(self.logout)
    }

    /// Worked time as "Xh Ym".
    pub fn working_hours(&self) -> String {
        format_minutes(self.worked_minutes.unwrap_or(0))
    }

    /// Overtime as "Xh Ym".
    pub fn overtime(&self) -> String {
        format_minutes(self.overtime_minutes.unwrap_or(0))
    }
}

/// One employee's attendance on one date of a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeAttendance {
    /// Employee identifier.
    pub employee_code: String,
    /// First name observed for the employee in this request.
    pub employee_name: Option<String>,
    /// The calendar date of this record.
    pub date: NaiveDate,
    /// Weekday of `date`.
    pub day: Weekday,
    /// Clock time of the earliest entry punch.
    pub login: Option<NaiveTime>,
    /// Clock time of the latest exit punch.
    pub logout: Option<NaiveTime>,
    /// Presence status.
    pub status: AttendanceStatus,
    /// Minutes between login and logout (zero unless present).
    pub worked_minutes: u32,
    /// Minutes past the office end time (zero unless present).
    pub overtime_minutes: u32,
}

impl RangeAttendance {
    /// Display name, or "-" if unknown.
    pub fn name_label(&self) -> &str {
        self.employee_name.as_deref().unwrap_or("-")
    }

    /// Worked time as "Xh Ym".
    pub fn working_hours(&self) -> String {
        format_minutes(self.worked_minutes)
    }

    /// Overtime as "Xh Ym".
    pub fn overtime(&self) -> String {
        format_minutes(self.overtime_minutes)
    }
}

/// Attendance for one date, with the queried date echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAttendanceReport {
    /// The queried date.
    pub date: NaiveDate,
    /// Number of employees with at least one punch.
    pub total_employees: usize,
    /// Records in first-observed employee order.
    pub attendance: Vec<DailyAttendance>,
}

impl DayAttendanceReport {
    /// Wraps the aggregator output with its scope metadata.
    pub fn new(date: NaiveDate, attendance: Vec<DailyAttendance>) -> Self {
        Self {
            date,
            total_employees: attendance.len(),
            attendance,
        }
    }
}

/// Attendance over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeAttendanceReport {
    /// First queried date.
    pub start_date: NaiveDate,
    /// Last queried date.
    pub end_date: NaiveDate,
    /// Number of employee-day records.
    pub total_records: usize,
    /// Records grouped by employee, dates ascending within each employee.
    pub attendance: Vec<RangeAttendance>,
}

impl RangeAttendanceReport {
    /// Wraps the aggregator output with its scope metadata.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, attendance: Vec<RangeAttendance>) -> Self {
        Self {
            start_date,
            end_date,
            total_records: attendance.len(),
            attendance,
        }
    }
}
