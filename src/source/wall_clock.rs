//! Wall-clock timestamp contract for punch data.
//!
//! Terminal timestamps must already carry local wall-clock fields. The store
//! encodes them as ISO-8601 text, sometimes tagged with `Z`; that tag is
//! dropped without conversion. A numeric offset means the value would need
//! converting before its hour and minute could be read, so it is rejected.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Why a timestamp broke the wall-clock contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WallClockError {
    /// The value carries a numeric UTC offset.
    #[error("numeric UTC offset in '{0}' is not accepted; timestamps must carry wall-clock fields")]
    OffsetNotAllowed(String),

    /// The value is not a recognized date-time.
    #[error("unrecognized timestamp '{0}'")]
    Unrecognized(String),
}

const FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a wall-clock timestamp.
///
/// # Examples
///
/// ```
/// use attendance_engine::source::parse_wall_clock;
/// use chrono::Timelike;
///
/// let ts = parse_wall_clock("2024-05-01T09:02:00.000Z").unwrap();
/// assert_eq!((ts.hour(), ts.minute()), (9, 2));
///
/// assert!(parse_wall_clock("2024-05-01T09:02:00+05:30").is_err());
/// ```
pub fn parse_wall_clock(value: &str) -> Result<NaiveDateTime, WallClockError> {
    let trimmed = value.trim();
    let body = trimmed.strip_suffix('Z').unwrap_or(trimmed);

    if has_numeric_offset(body) {
        return Err(WallClockError::OffsetNotAllowed(value.to_string()));
    }

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(body, fmt).ok())
        .ok_or_else(|| WallClockError::Unrecognized(value.to_string()))
}

/// True if a `+` or `-` appears after the date part.
fn has_numeric_offset(value: &str) -> bool {
    value
        .get(10..)
        .is_some_and(|time_part| time_part.contains(['+', '-']))
}
