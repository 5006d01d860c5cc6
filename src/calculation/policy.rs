//! Attendance policy passed explicitly into the aggregators.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::time_arithmetic::default_office_end;

/// Rules the aggregators apply when deriving metrics.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::AttendancePolicy;
/// use chrono::NaiveTime;
///
/// let policy = AttendancePolicy::default();
/// assert_eq!(policy.office_end, NaiveTime::from_hms_opt(18, 30, 0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePolicy {
    /// Time of day after which presence counts as overtime.
    pub office_end: NaiveTime,
}

impl AttendancePolicy {
    /// Creates a policy with the given office end time.
    pub fn new(office_end: NaiveTime) -> Self {
        Self { office_end }
    }

    /// The overtime boundary on the given date.
    pub fn office_boundary(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.office_end)
    }
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self::new(default_office_end())
    }
}
