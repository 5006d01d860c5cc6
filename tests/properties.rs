//! Property-based tests for the attendance aggregators.
//!
//! Punches are generated over a handful of employees, dates, terminals and
//! minutes of the day, in arbitrary order.

use std::collections::HashSet;

use attendance_engine::calculation::{aggregate_day, aggregate_range, AttendancePolicy};
use attendance_engine::models::{AttendanceStatus, DeviceClass, PunchEvent};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

const EMPLOYEES: [&str; 4] = ["E1", "E2", "E10", "E100"];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

fn device_strategy() -> impl Strategy<Value = DeviceClass> {
    prop_oneof![
        Just(DeviceClass::Entry),
        Just(DeviceClass::Exit),
        Just(DeviceClass::Other),
    ]
}

fn punch(employee: usize, day_offset: i64, minute: i64, device: DeviceClass) -> PunchEvent {
    let midnight: NaiveDateTime = (base_date() + Duration::days(day_offset))
        .and_hms_opt(0, 0, 0)
        .unwrap();
    PunchEvent {
        employee_code: EMPLOYEES[employee].to_string(),
        employee_name: None,
        punch_time: midnight + Duration::minutes(minute),
        device,
    }
}

fn single_day_punches() -> impl Strategy<Value = Vec<PunchEvent>> {
    prop::collection::vec(
        (0..EMPLOYEES.len(), 0i64..1440, device_strategy()),
        0..40,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(employee, minute, device)| punch(employee, 0, minute, device))
            .collect()
    })
}

fn multi_day_punches() -> impl Strategy<Value = Vec<PunchEvent>> {
    prop::collection::vec(
        (0..EMPLOYEES.len(), 0i64..5, 0i64..1440, device_strategy()),
        0..60,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(employee, day, minute, device)| punch(employee, day, minute, device))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_day_aggregation_is_deterministic(punches in single_day_punches()) {
        let policy = AttendancePolicy::default();
        prop_assert_eq!(aggregate_day(&punches, &policy), aggregate_day(&punches, &policy));
    }

    #[test]
    fn prop_day_one_record_per_employee(punches in single_day_punches()) {
        let records = aggregate_day(&punches, &AttendancePolicy::default());

        let expected: HashSet<&str> = punches.iter().map(|p| p.employee_code.as_str()).collect();
        let actual: HashSet<&str> = records.iter().map(|r| r.employee_code.as_str()).collect();
        prop_assert_eq!(records.len(), actual.len());
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn prop_day_login_is_first_entry_in_input_order(punches in single_day_punches()) {
        let records = aggregate_day(&punches, &AttendancePolicy::default());

        for record in &records {
            let first_entry = punches
                .iter()
                .find(|p| p.employee_code == record.employee_code && p.device == DeviceClass::Entry)
                .map(|p| p.punch_time.time());
            let last_exit = punches
                .iter()
                .rev()
                .find(|p| p.employee_code == record.employee_code && p.device == DeviceClass::Exit)
                .map(|p| p.punch_time.time());
            prop_assert_eq!(record.login, first_entry);
            prop_assert_eq!(record.logout, last_exit);
        }
    }

    #[test]
    fn prop_day_worked_time_needs_both_ends(punches in single_day_punches()) {
        let records = aggregate_day(&punches, &AttendancePolicy::default());

        for record in &records {
            let worked = record.worked_minutes.unwrap_or(0);
            match (record.login, record.logout) {
                (Some(login), Some(logout)) if logout > login => {
                    prop_assert!(worked as i64 <= (logout - login).num_minutes());
                }
                _ => prop_assert_eq!(worked, 0),
            }
            if record.logout.is_none() {
                prop_assert_eq!(record.overtime_minutes.unwrap_or(0), 0);
            }
        }
    }

    #[test]
    fn prop_range_aggregation_is_deterministic(punches in multi_day_punches()) {
        let policy = AttendancePolicy::default();
        prop_assert_eq!(aggregate_range(&punches, &policy), aggregate_range(&punches, &policy));
    }

    #[test]
    fn prop_range_keys_unique_and_dates_ascending(punches in multi_day_punches()) {
        let records = aggregate_range(&punches, &AttendancePolicy::default());

        let mut seen = HashSet::new();
        for record in &records {
            prop_assert!(seen.insert((record.employee_code.clone(), record.date)));
        }

        let expected: HashSet<(String, NaiveDate)> = punches
            .iter()
            .map(|p| (p.employee_code.clone(), p.date()))
            .collect();
        prop_assert_eq!(seen, expected);

        for pair in records.windows(2) {
            if pair[0].employee_code == pair[1].employee_code {
                prop_assert!(pair[0].date < pair[1].date);
            }
        }
    }

    #[test]
    fn prop_range_employees_are_contiguous(punches in multi_day_punches()) {
        let records = aggregate_range(&punches, &AttendancePolicy::default());

        let mut finished: HashSet<&str> = HashSet::new();
        for pair in records.windows(2) {
            if pair[0].employee_code != pair[1].employee_code {
                prop_assert!(finished.insert(pair[0].employee_code.as_str()));
                prop_assert!(!finished.contains(pair[1].employee_code.as_str()));
            }
        }
    }

    #[test]
    fn prop_range_status_matches_presence(punches in multi_day_punches()) {
        let records = aggregate_range(&punches, &AttendancePolicy::default());

        for record in &records {
            let expected = AttendanceStatus::from_presence(record.login.is_some(), record.logout.is_some());
            prop_assert_eq!(record.status, expected);
            if record.status != AttendanceStatus::Present {
                prop_assert_eq!(record.worked_minutes, 0);
            }
            if record.logout.is_none() {
                prop_assert_eq!(record.overtime_minutes, 0);
            }
        }
    }

    #[test]
    fn prop_range_login_is_earliest_entry(punches in multi_day_punches()) {
        let records = aggregate_range(&punches, &AttendancePolicy::default());

        for record in &records {
            let earliest = punches
                .iter()
                .filter(|p| {
                    p.employee_code == record.employee_code
                        && p.date() == record.date
                        && p.device == DeviceClass::Entry
                })
                .map(|p| p.punch_time.time())
                .min();
            prop_assert_eq!(record.login, earliest);
        }
    }
}
