//! Date-range attendance aggregation.
//!
//! Groups punches by employee and calendar date and derives one
//! [`RangeAttendance`] per employee-day. Unlike the daily aggregator, the
//! login and logout are selected by timestamp inside each group, so arrival
//! order does not matter here.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::models::{AttendanceStatus, EmployeeDay, PunchEvent, RangeAttendance};

use super::policy::AttendancePolicy;
use super::time_arithmetic::minutes_of_day;

/// Summarizes one employee-day group.
///
/// Selects the minimum-timestamp entry punch and the maximum-timestamp exit
/// punch, then derives minutes and status. Worked and overtime minutes use
/// hour and minute fields only, are clipped at zero, and are only computed
/// when both ends exist. An empty group yields an [`AttendanceStatus::Absent`]
/// record.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{summarize_group, AttendancePolicy};
/// use attendance_engine::models::{AttendanceStatus, EmployeeDay};
/// use chrono::NaiveDate;
///
/// let key = EmployeeDay("E1".to_string(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
/// let record = summarize_group(&key, None, std::iter::empty(), &AttendancePolicy::default());
/// assert_eq!(record.status, AttendanceStatus::Absent);
/// assert_eq!(record.worked_minutes, 0);
/// ```
pub fn summarize_group<'a, I>(
    key: &EmployeeDay,
    employee_name: Option<&str>,
    punches: I,
    policy: &AttendancePolicy,
) -> RangeAttendance
where
    I: IntoIterator<Item = &'a PunchEvent>,
{
    let mut login: Option<&PunchEvent> = None;
    let mut logout: Option<&PunchEvent> = None;

    for punch in punches {
        if punch.is_entry() && login.is_none_or(|l| punch.punch_time < l.punch_time) {
            login = Some(punch);
        }
        if punch.is_exit() && logout.is_none_or(|l| punch.punch_time >= l.punch_time) {
            logout = Some(punch);
        }
    }

    let login = login.map(|p| p.punch_time.time());
    let logout = logout.map(|p| p.punch_time.time());

    let (worked_minutes, overtime_minutes) = match (login, logout) {
        (Some(login), Some(logout)) => {
            let out_mins = minutes_of_day(logout);
            let worked = (out_mins - minutes_of_day(login)).max(0);
            let overtime = (out_mins - minutes_of_day(policy.office_end)).max(0);
            (worked as u32, overtime as u32)
        }
        _ => (0, 0),
    };

    RangeAttendance {
        employee_code: key.employee_code().to_string(),
        employee_name: employee_name.map(str::to_string),
        date: key.date(),
        day: key.date().weekday(),
        login,
        logout,
        status: AttendanceStatus::from_presence(login.is_some(), logout.is_some()),
        worked_minutes,
        overtime_minutes,
    }
}

/// Aggregates punches across a date range into per-employee-day records.
///
/// # Arguments
///
/// * `punches` - Punches for any employees over an inclusive date range, in
///   any order
/// * `policy` - The office end time used for overtime
///
/// # Returns
///
/// One record per employee-day that has at least one punch. Employees appear
/// in the order their first punch is seen; within an employee, dates ascend.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{aggregate_range, AttendancePolicy};
/// use attendance_engine::models::{AttendanceStatus, DeviceClass, PunchEvent};
/// use chrono::NaiveDateTime;
///
/// let punch = |time: &str, device| PunchEvent {
///     employee_code: "E1".to_string(),
///     employee_name: None,
///     punch_time: NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M").unwrap(),
///     device,
/// };
/// let punches = vec![
///     punch("2024-05-02 18:00", DeviceClass::Exit),
///     punch("2024-05-01 09:00", DeviceClass::Entry),
///     punch("2024-05-02 09:15", DeviceClass::Entry),
/// ];
///
/// let records = aggregate_range(&punches, &AttendancePolicy::default());
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].status, AttendanceStatus::PartialNoLogout);
/// assert_eq!(records[1].status, AttendanceStatus::Present);
/// assert_eq!(records[1].worked_minutes, 525);
/// ```
pub fn aggregate_range(punches: &[PunchEvent], policy: &AttendancePolicy) -> Vec<RangeAttendance> {
    let mut employees: Vec<(&str, Option<&str>)> = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut groups: BTreeMap<EmployeeDay, Vec<&PunchEvent>> = BTreeMap::new();

    for punch in punches {
        seen.entry(punch.employee_code.as_str()).or_insert_with(|| {
            employees.push((punch.employee_code.as_str(), punch.employee_name.as_deref()));
            employees.len() - 1
        });
        groups
            .entry(EmployeeDay(punch.employee_code.clone(), punch.date()))
            .or_default()
            .push(punch);
    }

    let mut records = Vec::with_capacity(groups.len());
    for (code, name) in employees {
        let first = EmployeeDay(code.to_string(), NaiveDate::MIN);
        let last = EmployeeDay(code.to_string(), NaiveDate::MAX);
        for (key, day_punches) in groups.range(first..=last) {
            records.push(summarize_group(key, name, day_punches.iter().copied(), policy));
        }
    }

    debug!(
        punches = punches.len(),
        groups = groups.len(),
        records = records.len(),
        "Aggregated range attendance"
    );

    records
}
