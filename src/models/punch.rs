//! Punch event model and related types.
//!
//! A [`PunchRow`] is what the store hands back: the raw terminal alias and the
//! employee's first name joined in. A [`PunchEvent`] is the same punch after
//! the alias has been classified, which is all the aggregators look at.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::DeviceAliases;

/// The role of the terminal a punch was recorded on.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DeviceClass;
///
/// let class = DeviceClass::Entry;
/// assert_eq!(format!("{:?}", class), "Entry");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// A terminal recording arrivals.
    Entry,
    /// A terminal recording departures.
    Exit,
    /// Any other terminal. Counts toward group membership only.
    Other,
}

/// A joined transaction row as returned by the punch store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchRow {
    /// The employee code recorded by the terminal.
    pub emp_code: String,
    /// The employee's first name, if the directory knows the code.
    pub first_name: Option<String>,
    /// Wall-clock time of the punch.
    pub punch_time: NaiveDateTime,
    /// The alias of the terminal the punch was made on.
    pub terminal_alias: String,
}

/// A single classified punch.
///
/// `punch_time` carries local wall-clock fields; no time-zone conversion is
/// ever applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchEvent {
    /// Employee identifier.
    pub employee_code: String,
    /// Display name, if known.
    pub employee_name: Option<String>,
    /// Wall-clock time of the punch.
    pub punch_time: NaiveDateTime,
    /// The class of terminal the punch came from.
    pub device: DeviceClass,
}

impl PunchEvent {
    /// Classifies a store row using the configured terminal aliases.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::config::DeviceAliases;
    /// use attendance_engine::models::{DeviceClass, PunchEvent, PunchRow};
    /// use chrono::NaiveDateTime;
    ///
    /// let row = PunchRow {
    ///     emp_code: "E1".to_string(),
    ///     first_name: Some("Asha".to_string()),
    ///     punch_time: NaiveDateTime::parse_from_str("2024-05-01 09:02:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     terminal_alias: "In Device".to_string(),
    /// };
    /// let event = PunchEvent::from_row(&row, &DeviceAliases::default());
    /// assert_eq!(event.device, DeviceClass::Entry);
    /// assert_eq!(event.employee_name.as_deref(), Some("Asha"));
    /// ```
    pub fn from_row(row: &PunchRow, aliases: &DeviceAliases) -> Self {
        Self {
            employee_code: row.emp_code.clone(),
            employee_name: row.first_name.clone(),
            punch_time: row.punch_time,
            device: aliases.classify(&row.terminal_alias),
        }
    }

    /// Classifies a batch of store rows, preserving their order.
    pub fn from_rows(rows: &[PunchRow], aliases: &DeviceAliases) -> Vec<Self> {
        rows.iter().map(|row| Self::from_row(row, aliases)).collect()
    }

    /// The calendar date of the punch.
    pub fn date(&self) -> NaiveDate {
        self.punch_time.date()
    }

    /// Returns true if the punch came from an entry terminal.
    pub fn is_entry(&self) -> bool {
        self.device == DeviceClass::Entry
    }

    /// Returns true if the punch came from an exit terminal.
    pub fn is_exit(&self) -> bool {
        self.device == DeviceClass::Exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn make_row(alias: &str) -> PunchRow {
        PunchRow {
            emp_code: "E7".to_string(),
            first_name: None,
            punch_time: make_datetime("2024-05-01 23:59:00"),
            terminal_alias: alias.to_string(),
        }
    }

    #[test]
    fn test_unknown_alias_is_other() {
        let event = PunchEvent::from_row(&make_row("Canteen"), &DeviceAliases::default());
        assert_eq!(event.device, DeviceClass::Other);
        assert!(!event.is_entry());
        assert!(!event.is_exit());
    }

    #[test]
    fn test_exit_alias_is_exit() {
        let event = PunchEvent::from_row(&make_row("Out Device"), &DeviceAliases::default());
        assert!(event.is_exit());
    }

    #[test]
    fn test_alias_match_is_exact() {
        let event = PunchEvent::from_row(&make_row("in device"), &DeviceAliases::default());
        assert_eq!(event.device, DeviceClass::Other);
    }

    #[test]
    fn test_date_is_taken_from_wall_clock_fields() {
        let event = PunchEvent::from_row(&make_row("In Device"), &DeviceAliases::default());
        assert_eq!(event.date(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn test_from_rows_preserves_order() {
        let rows = vec![make_row("Out Device"), make_row("In Device")];
        let events = PunchEvent::from_rows(&rows, &DeviceAliases::default());
        assert_eq!(events[0].device, DeviceClass::Exit);
        assert_eq!(events[1].device, DeviceClass::Entry);
    }

    #[test]
    fn test_row_round_trips_through_json() {
        let row = make_row("In Device");
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"punch_time\":\"2024-05-01T23:59:00\""));
        let back: PunchRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
