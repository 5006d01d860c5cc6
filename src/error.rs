//! Error types for the Attendance Engine.
//!
//! The aggregation core itself never fails: missing punches degrade to
//! sentinel values. Errors only arise at the edges, when loading
//! configuration or punch data, or when a request is missing parameters.

use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was present but not usable.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// Punch data file was not found at the specified path.
    #[error("Punch data file not found: {path}")]
    PunchDataNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Punch data file could not be parsed.
    #[error("Failed to parse punch data '{path}': {message}")]
    PunchDataParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A punch row broke the wall-clock timestamp contract.
    #[error("Invalid punch for employee '{emp_code}': {message}")]
    InvalidPunch {
        /// The employee code on the offending row.
        emp_code: String,
        /// What was wrong with the row.
        message: String,
    },

    /// A required request parameter was absent.
    #[error("{message}")]
    MissingParameter {
        /// Message returned to the caller.
        message: String,
    },

    /// The punch store failed while answering a query.
    #[error("Data source error: {message}")]
    DataSource {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "office_end_time".to_string(),
            message: "expected HH:MM".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'office_end_time': expected HH:MM"
        );
    }

    #[test]
    fn test_invalid_punch_displays_employee_and_message() {
        let error = EngineError::InvalidPunch {
            emp_code: "E1".to_string(),
            message: "numeric UTC offsets are not accepted".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid punch for employee 'E1': numeric UTC offsets are not accepted"
        );
    }

    #[test]
    fn test_missing_parameter_displays_message_verbatim() {
        let error = EngineError::MissingParameter {
            message: "Date required (format: YYYY-MM-DD)".to_string(),
        };
        assert_eq!(error.to_string(), "Date required (format: YYYY-MM-DD)");
    }

    #[test]
    fn test_data_source_displays_message() {
        let error = EngineError::DataSource {
            message: "connection reset".to_string(),
        };
        assert_eq!(error.to_string(), "Data source error: connection reset");
    }

    #[test]
    fn test_error_is_debug() {
        let error = EngineError::PunchDataNotFound {
            path: "punches.json".to_string(),
        };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("PunchDataNotFound"));
    }
}
