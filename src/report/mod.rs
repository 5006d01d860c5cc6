//! Printable attendance reports.
//!
//! Renders day and range attendance as fixed-column plain text, one row per
//! record in the order the aggregators emitted them. The renderer only
//! formats; it never reorders or recomputes anything.

mod table;

use crate::calculation::format_label;
use crate::config::ReportSettings;
use crate::models::{DayAttendanceReport, RangeAttendanceReport};

use table::{Column, Table, centered};

pub use table::PAGE_BREAK;

const DAY_COLUMNS: [Column; 7] = [
    Column { header: "Emp Code", width: 10 },
    Column { header: "Name", width: 16 },
    Column { header: "Day", width: 6 },
    Column { header: "Login", width: 7 },
    Column { header: "Logout", width: 8 },
    Column { header: "Working", width: 10 },
    Column { header: "Overtime", width: 10 },
];

const RANGE_COLUMNS: [Column; 8] = [
    Column { header: "Emp", width: 8 },
    Column { header: "Name", width: 14 },
    Column { header: "Date", width: 12 },
    Column { header: "Day", width: 6 },
    Column { header: "Login", width: 7 },
    Column { header: "Logout", width: 8 },
    Column { header: "Work", width: 9 },
    Column { header: "OT", width: 9 },
];

fn preamble(title: &str, scope: &str, width: usize) -> String {
    format!("{}\n{}\n\n", centered(title, width), centered(scope, width))
}

/// Renders the single-day report.
///
/// # Example
///
/// ```
/// use attendance_engine::config::ReportSettings;
/// use attendance_engine::models::DayAttendanceReport;
/// use attendance_engine::report::render_day_report;
/// use chrono::NaiveDate;
///
/// let report = DayAttendanceReport::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), vec![]);
/// let text = render_day_report(&report, &ReportSettings::default());
/// assert!(text.contains("Daily Attendance Report"));
/// assert!(text.contains("Date: 2024-05-01"));
/// ```
pub fn render_day_report(report: &DayAttendanceReport, settings: &ReportSettings) -> String {
    let width = Table::width(&DAY_COLUMNS);
    let scope = format!("Date: {}", report.date);
    let mut table = Table::new(
        preamble(&settings.day_title, &scope, width),
        &DAY_COLUMNS,
        settings.rows_per_page,
    );

    for record in &report.attendance {
        let day = record.day_label();
        let login = record.login_label();
        let logout = record.logout_label();
        let working = record.working_hours();
        let overtime = record.overtime();
        table.push_row(&[
            record.employee_code.as_str(),
            record.name_label(),
            &day,
            &login,
            &logout,
            &working,
            &overtime,
        ]);
    }

    table.finish()
}

/// Renders the date-range report.
pub fn render_range_report(report: &RangeAttendanceReport, settings: &ReportSettings) -> String {
    let width = Table::width(&RANGE_COLUMNS);
    let scope = format!("From {} To {}", report.start_date, report.end_date);
    let mut table = Table::new(
        preamble(&settings.range_title, &scope, width),
        &RANGE_COLUMNS,
        settings.rows_per_page,
    );

    for record in &report.attendance {
        let date = record.date.to_string();
        let day = record.day.to_string();
        let login = format_label(record.login);
        let logout = format_label(record.logout);
        let working = record.working_hours();
        let overtime = record.overtime();
        table.push_row(&[
            record.employee_code.as_str(),
            record.name_label(),
            &date,
            &day,
            &login,
            &logout,
            &working,
            &overtime,
        ]);
    }

    table.finish()
}

/// Keeps only `[A-Za-z0-9._-]`.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}

/// Download name for the single-day report.
pub fn day_report_filename(report: &DayAttendanceReport) -> String {
    sanitize_filename(&format!("Attendance_{}.txt", report.date))
}

/// Download name for the date-range report.
pub fn range_report_filename(report: &RangeAttendanceReport) -> String {
    sanitize_filename(&format!(
        "Week_Attendance_{}_to_{}.txt",
        report.start_date, report.end_date
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, DailyAttendance, RangeAttendance};
    use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn day_report() -> DayAttendanceReport {
        DayAttendanceReport::new(
            make_date("2024-05-01"),
            vec![
                DailyAttendance {
                    employee_code: "1001".to_string(),
                    employee_name: Some("Asha".to_string()),
                    day: Some(Weekday::Wed),
                    login: Some(make_time("09:02")),
                    logout: Some(make_time("18:47")),
                    worked_minutes: Some(585),
                    overtime_minutes: Some(17),
                },
                DailyAttendance {
                    employee_code: "1003".to_string(),
                    employee_name: None,
                    day: None,
                    login: None,
                    logout: Some(make_time("18:05")),
                    worked_minutes: None,
                    overtime_minutes: None,
                },
            ],
        )
    }

    #[test]
    fn test_day_report_rows() {
        let text = render_day_report(&day_report(), &ReportSettings::default());
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].trim() == "Daily Attendance Report");
        assert!(lines[1].trim() == "Date: 2024-05-01");
        assert!(lines[3].starts_with("Emp Code  Name"));
        assert_eq!(
            lines[5],
            "1001      Asha            Wed   09:02  18:47   9h 45m    0h 17m"
        );
        assert_eq!(
            lines[6],
            "1003      -               -     -      18:05   0h 0m     0h 0m"
        );
    }

    #[test]
    fn test_range_report_rows_keep_emission_order() {
        let record = |code: &str, date: &str| RangeAttendance {
            employee_code: code.to_string(),
            employee_name: Some("Asha".to_string()),
            date: make_date(date),
            day: make_date(date).weekday(),
            login: Some(make_time("09:00")),
            logout: None,
            status: AttendanceStatus::PartialNoLogout,
            worked_minutes: 0,
            overtime_minutes: 0,
        };
        let report = RangeAttendanceReport::new(
            make_date("2024-05-01"),
            make_date("2024-05-07"),
            vec![record("1002", "2024-05-02"), record("1001", "2024-05-01")],
        );

        let text = render_range_report(&report, &ReportSettings::default());
        assert!(text.contains("From 2024-05-01 To 2024-05-07"));
        let first = text.find("1002").unwrap();
        let second = text.find("1001 ").unwrap();
        assert!(first < second);
        assert!(text.contains("2024-05-02  Thu   09:00  -       0h 0m    0h 0m"));
    }

    #[test]
    fn test_rows_per_page_from_settings() {
        let settings = ReportSettings {
            rows_per_page: 1,
            ..ReportSettings::default()
        };
        let text = render_day_report(&day_report(), &settings);
        assert_eq!(text.matches(PAGE_BREAK).count(), 1);
    }

    #[test]
    fn test_filenames() {
        assert_eq!(day_report_filename(&day_report()), "Attendance_2024-05-01.txt");
        let range = RangeAttendanceReport::new(make_date("2024-05-01"), make_date("2024-05-07"), vec![]);
        assert_eq!(
            range_report_filename(&range),
            "Week_Attendance_2024-05-01_to_2024-05-07.txt"
        );
        assert_eq!(sanitize_filename("a b/c\"d.txt"), "abcd.txt");
    }
}
