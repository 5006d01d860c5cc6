//! Daily attendance aggregation.
//!
//! Groups the punches of a single calendar date by employee and derives one
//! [`DailyAttendance`] per employee. Selection within a group trusts the order
//! the punches arrive in; nothing is re-sorted.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{DailyAttendance, PunchEvent};

use super::policy::AttendancePolicy;
use super::time_arithmetic::{day_of_week, duration_minutes, overtime_minutes};

/// Punches of one employee, reduced as they stream past.
struct DayGroup<'a> {
    employee_code: &'a str,
    employee_name: Option<&'a str>,
    first_entry: Option<&'a PunchEvent>,
    last_exit: Option<&'a PunchEvent>,
}

impl<'a> DayGroup<'a> {
    fn new(punch: &'a PunchEvent) -> Self {
        Self {
            employee_code: &punch.employee_code,
            employee_name: punch.employee_name.as_deref(),
            first_entry: None,
            last_exit: None,
        }
    }

    fn observe(&mut self, punch: &'a PunchEvent) {
        if punch.is_entry() && self.first_entry.is_none() {
            self.first_entry = Some(punch);
        }
        if punch.is_exit() {
            self.last_exit = Some(punch);
        }
    }

    fn into_record(self, policy: &AttendancePolicy) -> DailyAttendance {
        let login = self.first_entry.map(|p| p.punch_time);
        let logout = self.last_exit.map(|p| p.punch_time);

        let (worked_minutes, overtime_minutes) = match (login, logout) {
            (Some(login), Some(logout)) => {
                let boundary = policy.office_boundary(login.date());
                (
                    Some(duration_minutes(Some(login), Some(logout))),
                    Some(overtime_minutes(boundary, logout)),
                )
            }
            _ => (None, None),
        };

        DailyAttendance {
            employee_code: self.employee_code.to_string(),
            employee_name: self.employee_name.map(str::to_string),
            day: login.map(day_of_week),
            login: login.map(|t| t.time()),
            logout: logout.map(|t| t.time()),
            worked_minutes,
            overtime_minutes,
        }
    }
}

/// Aggregates one calendar date of punches into per-employee records.
///
/// # Arguments
///
/// * `punches` - Punches for exactly one date, in store order
/// * `policy` - The office end time used for overtime
///
/// # Behavior
///
/// - Employees appear in the order their first punch is seen
/// - The first name seen for an employee code wins
/// - Login is the first entry punch in input order, logout the last exit
///   punch in input order
/// - Worked time and overtime are only computed when both ends exist
/// - Punches from other terminals only make an employee appear
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{aggregate_day, AttendancePolicy};
/// use attendance_engine::models::{DeviceClass, PunchEvent};
/// use chrono::NaiveDateTime;
///
/// let punch = |time: &str, device| PunchEvent {
///     employee_code: "E1".to_string(),
///     employee_name: Some("Asha".to_string()),
///     punch_time: NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M").unwrap(),
///     device,
/// };
/// let punches = vec![
///     punch("2024-05-01 09:02", DeviceClass::Entry),
///     punch("2024-05-01 18:47", DeviceClass::Exit),
/// ];
///
/// let records = aggregate_day(&punches, &AttendancePolicy::default());
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].login_label(), "09:02");
/// assert_eq!(records[0].logout_label(), "18:47");
/// assert_eq!(records[0].working_hours(), "9h 45m");
/// assert_eq!(records[0].overtime(), "0h 17m");
/// ```
pub fn aggregate_day(punches: &[PunchEvent], policy: &AttendancePolicy) -> Vec<DailyAttendance> {
    let mut groups: Vec<DayGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for punch in punches {
        let slot = *index
            .entry(punch.employee_code.as_str())
            .or_insert_with(|| {
                groups.push(DayGroup::new(punch));
                groups.len() - 1
            });
        groups[slot].observe(punch);
    }

    debug!(
        punches = punches.len(),
        employees = groups.len(),
        "Aggregated daily attendance"
    );

    groups
        .into_iter()
        .map(|group| group.into_record(policy))
        .collect()
}
