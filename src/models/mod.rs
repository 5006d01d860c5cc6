//! Core data models for the Attendance Engine.
//!
//! This module contains the punch inputs and the attendance records the
//! aggregators derive from them.

mod attendance;
mod punch;

pub use attendance::{
    AttendanceStatus, DailyAttendance, DayAttendanceReport, EmployeeDay, RangeAttendance,
    RangeAttendanceReport,
};
pub use punch::{DeviceClass, PunchEvent, PunchRow};
