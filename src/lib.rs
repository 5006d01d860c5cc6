//! Attendance Engine for biometric terminal punch data
//!
//! This crate turns raw punch events recorded by entry and exit terminals into
//! per-employee attendance records (login, logout, worked time and overtime)
//! for a single day or a date range, and serves them as JSON or as printable
//! fixed-column reports.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod source;
