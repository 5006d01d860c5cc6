//! Configuration types for the attendance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::calculation::AttendancePolicy;
use crate::models::DeviceClass;

/// Terminal aliases that mark entry and exit devices.
///
/// Matching is exact and case-sensitive. Every other alias is
/// [`DeviceClass::Other`].
///
/// # Example
///
/// ```
/// use attendance_engine::config::DeviceAliases;
/// use attendance_engine::models::DeviceClass;
///
/// let aliases = DeviceAliases::default();
/// assert_eq!(aliases.classify("In Device"), DeviceClass::Entry);
/// assert_eq!(aliases.classify("Out Device"), DeviceClass::Exit);
/// assert_eq!(aliases.classify("Lobby"), DeviceClass::Other);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceAliases {
    /// Alias of the terminal recording arrivals.
    pub entry_alias: String,
    /// Alias of the terminal recording departures.
    pub exit_alias: String,
}

impl DeviceAliases {
    /// Classifies a terminal alias.
    pub fn classify(&self, alias: &str) -> DeviceClass {
        if alias == self.entry_alias {
            DeviceClass::Entry
        } else if alias == self.exit_alias {
            DeviceClass::Exit
        } else {
            DeviceClass::Other
        }
    }
}

impl Default for DeviceAliases {
    fn default() -> Self {
        Self {
            entry_alias: "In Device".to_string(),
            exit_alias: "Out Device".to_string(),
        }
    }
}

/// Contents of engine.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineFile {
    /// Name of the site the terminals belong to.
    pub site: String,
    /// Office end time as "HH:MM".
    pub office_end_time: String,
    /// Terminal aliases.
    pub devices: DeviceAliases,
}

/// Contents of report.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportSettings {
    /// Title of the single-day report.
    pub day_title: String,
    /// Title of the date-range report.
    pub range_title: String,
    /// Data rows per page before the header is repeated.
    pub rows_per_page: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            day_title: "Daily Attendance Report".to_string(),
            range_title: "Weekly Attendance Report".to_string(),
            rows_per_page: 40,
        }
    }
}

/// The complete, validated engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    site: String,
    policy: AttendancePolicy,
    devices: DeviceAliases,
    report: ReportSettings,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        site: String,
        policy: AttendancePolicy,
        devices: DeviceAliases,
        report: ReportSettings,
    ) -> Self {
        Self {
            site,
            policy,
            devices,
            report,
        }
    }

    /// Returns the site name.
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Returns the attendance policy.
    pub fn policy(&self) -> &AttendancePolicy {
        &self.policy
    }

    /// Returns the terminal aliases.
    pub fn devices(&self) -> &DeviceAliases {
        &self.devices
    }

    /// Returns the report settings.
    pub fn report(&self) -> &ReportSettings {
        &self.report
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(
            "Head Office".to_string(),
            AttendancePolicy::default(),
            DeviceAliases::default(),
            ReportSettings::default(),
        )
    }
}
