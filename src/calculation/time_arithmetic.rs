//! Time arithmetic helpers.
//!
//! Everything here works on the wall-clock fields of a timestamp. Durations
//! are computed from time of day, never from the calendar-day difference, and
//! no time-zone conversion is performed anywhere.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

/// Hour of the default office end time.
pub const OFFICE_END_HOUR: u32 = 18;

/// Minute of the default office end time.
pub const OFFICE_END_MINUTE: u32 = 30;

/// The default office end time, 18:30.
pub fn default_office_end() -> NaiveTime {
    NaiveTime::from_hms_opt(OFFICE_END_HOUR, OFFICE_END_MINUTE, 0).unwrap_or_default()
}

/// Returns the weekday of the timestamp's calendar date.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::day_of_week;
/// use chrono::{NaiveDateTime, Weekday};
///
/// // 2024-05-01 is a Wednesday
/// let ts = NaiveDateTime::parse_from_str("2024-05-01 09:02:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(day_of_week(ts), Weekday::Wed);
/// assert_eq!(day_of_week(ts).to_string(), "Wed");
/// ```
pub fn day_of_week(timestamp: NaiveDateTime) -> Weekday {
    timestamp.date().weekday()
}

/// Returns "HH:MM" read straight from the timestamp's hour and minute.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::clock_label;
/// use chrono::NaiveDateTime;
///
/// let ts = NaiveDateTime::parse_from_str("2024-05-01 07:05:59", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(clock_label(ts), "07:05");
/// ```
pub fn clock_label(timestamp: NaiveDateTime) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Minutes since midnight, ignoring seconds.
pub fn minutes_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Whole minutes from `start` to `end`, by time of day.
///
/// Returns 0 if either end is missing or `end` is not after `start`. Seconds
/// take part in the difference, which is then floored to whole minutes.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::duration_minutes;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
///
/// assert_eq!(duration_minutes(Some(at("2024-05-01 09:00:00")), Some(at("2024-05-01 19:15:00"))), 615);
/// assert_eq!(duration_minutes(Some(at("2024-05-01 09:00:30")), Some(at("2024-05-01 17:00:00"))), 479);
/// assert_eq!(duration_minutes(Some(at("2024-05-01 10:05:00")), Some(at("2024-05-01 09:50:00"))), 0);
/// assert_eq!(duration_minutes(None, Some(at("2024-05-01 09:50:00"))), 0);
/// ```
pub fn duration_minutes(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> u32 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0;
    };

    let start_secs = i64::from(start.time().num_seconds_from_midnight());
    let end_secs = i64::from(end.time().num_seconds_from_midnight());
    let diff = end_secs - start_secs;
    if diff <= 0 {
        return 0;
    }

    (diff / 60) as u32
}

/// Worked duration formatted as "Xh Ym".
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::duration;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(duration(Some(at("2024-05-01 09:00:00")), Some(at("2024-05-01 17:00:00"))), "8h 0m");
/// assert_eq!(duration(None, None), "0h 0m");
/// ```
pub fn duration(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> String {
    format_minutes(duration_minutes(start, end))
}

/// The default office cutoff (18:30) on the given date.
pub fn office_boundary(date: NaiveDate) -> NaiveDateTime {
    date.and_time(default_office_end())
}

/// Minutes `end` runs past `boundary`, by time of day only.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{office_boundary, overtime_minutes};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let out = NaiveDateTime::parse_from_str("2024-05-01 19:15:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(overtime_minutes(office_boundary(date), out), 45);
/// ```
pub fn overtime_minutes(boundary: NaiveDateTime, end: NaiveDateTime) -> u32 {
    let diff = minutes_of_day(end.time()) - minutes_of_day(boundary.time());
    diff.max(0) as u32
}

/// Formats a minute count as "Xh Ym".
pub fn format_minutes(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Formats an optional clock time as "HH:MM", or "-" when absent.
pub fn format_label(time: Option<NaiveTime>) -> String {
    match time {
        Some(t) => t.format("%H:%M").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_day_of_week_for_each_weekday() {
        // 2024-04-29 is a Monday
        let expected = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        for (offset, label) in expected.iter().enumerate() {
            let date = make_date("2024-04-29") + chrono::Duration::days(offset as i64);
            let ts = date.and_hms_opt(12, 0, 0).unwrap();
            assert_eq!(day_of_week(ts).to_string(), *label);
        }
    }

    #[test]
    fn test_clock_label_zero_pads() {
        assert_eq!(clock_label(make_datetime("2024-05-01", "00:00:00")), "00:00");
        assert_eq!(clock_label(make_datetime("2024-05-01", "23:59:59")), "23:59");
    }

    #[test]
    fn test_duration_eight_hours() {
        let start = make_datetime("2024-05-01", "09:00:00");
        let end = make_datetime("2024-05-01", "17:00:00");
        assert_eq!(duration(Some(start), Some(end)), "8h 0m");
    }

    #[test]
    fn test_duration_ten_hours_fifteen() {
        let start = make_datetime("2024-05-01", "09:00:00");
        let end = make_datetime("2024-05-01", "19:15:00");
        assert_eq!(duration(Some(start), Some(end)), "10h 15m");
    }

    #[test]
    fn test_duration_clipped_when_end_before_start() {
        let start = make_datetime("2024-05-01", "10:05:00");
        let end = make_datetime("2024-05-01", "09:50:00");
        assert_eq!(duration(Some(start), Some(end)), "0h 0m");
    }

    #[test]
    fn test_duration_equal_ends_is_zero() {
        let t = make_datetime("2024-05-01", "10:05:00");
        assert_eq!(duration_minutes(Some(t), Some(t)), 0);
    }

    #[test]
    fn test_duration_missing_end_is_zero() {
        let start = make_datetime("2024-05-01", "10:05:00");
        assert_eq!(duration(Some(start), None), "0h 0m");
    }

    #[test]
    fn test_duration_ignores_calendar_day_difference() {
        // Only the time of day counts, so a logout on the next date before
        // the login's clock time clips to zero.
        let start = make_datetime("2024-05-01", "22:00:00");
        let end = make_datetime("2024-05-02", "06:00:00");
        assert_eq!(duration_minutes(Some(start), Some(end)), 0);

        let end = make_datetime("2024-05-02", "23:00:00");
        assert_eq!(duration_minutes(Some(start), Some(end)), 60);
    }

    #[test]
    fn test_duration_floors_partial_minutes() {
        let start = make_datetime("2024-05-01", "09:00:45");
        let end = make_datetime("2024-05-01", "09:02:30");
        assert_eq!(duration_minutes(Some(start), Some(end)), 1);
    }

    #[test]
    fn test_office_boundary_is_1830_on_date() {
        let boundary = office_boundary(make_date("2024-05-01"));
        assert_eq!(boundary, make_datetime("2024-05-01", "18:30:00"));
    }

    #[test]
    fn test_overtime_minutes_before_boundary_is_zero() {
        let boundary = office_boundary(make_date("2024-05-01"));
        assert_eq!(overtime_minutes(boundary, make_datetime("2024-05-01", "17:00:00")), 0);
        assert_eq!(overtime_minutes(boundary, make_datetime("2024-05-01", "18:30:59")), 0);
    }

    #[test]
    fn test_overtime_minutes_ignores_date() {
        let boundary = office_boundary(make_date("2024-05-01"));
        let end = make_datetime("2024-05-03", "18:47:00");
        assert_eq!(overtime_minutes(boundary, end), 17);
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0h 0m");
        assert_eq!(format_minutes(59), "0h 59m");
        assert_eq!(format_minutes(585), "9h 45m");
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(None), "-");
        assert_eq!(
            format_label(NaiveTime::from_hms_opt(9, 2, 40)),
            "09:02"
        );
    }

    #[test]
    fn test_minutes_of_day_ignores_seconds() {
        let t = NaiveTime::from_hms_opt(18, 30, 59).unwrap();
        assert_eq!(minutes_of_day(t), 18 * 60 + 30);
    }
}
