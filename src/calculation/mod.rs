//! Calculation logic for the Attendance Engine.
//!
//! This module contains the time arithmetic helpers, the daily aggregator
//! (one record per employee for a single date, selection in input order) and
//! the range aggregator (one record per employee-day, selection by timestamp).

mod daily;
mod policy;
mod range;
mod time_arithmetic;

pub use daily::aggregate_day;
pub use policy::AttendancePolicy;
pub use range::{aggregate_range, summarize_group};
pub use time_arithmetic::{
    OFFICE_END_HOUR, OFFICE_END_MINUTE, clock_label, day_of_week, default_office_end, duration,
    duration_minutes, format_label, format_minutes, minutes_of_day, office_boundary,
    overtime_minutes,
};
