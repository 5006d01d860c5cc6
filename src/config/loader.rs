//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use chrono::NaiveTime;
use std::fs;
use std::path::Path;

use crate::calculation::AttendancePolicy;
use crate::error::{EngineError, EngineResult};

use super::types::{DeviceAliases, EngineConfig, EngineFile, ReportSettings};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml   # Site name, office end time, terminal aliases
/// └── report.yaml   # Report titles and paging
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Office closes at {}", loader.config().policy().office_end);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The office end time is not "HH:MM"
    /// - The terminal aliases are empty or identical
    /// - `rows_per_page` is zero
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine = Self::load_yaml::<EngineFile>(&path.join("engine.yaml"))?;
        let report = Self::load_yaml::<ReportSettings>(&path.join("report.yaml"))?;

        let office_end = Self::parse_office_end(&engine.office_end_time)?;
        Self::validate_devices(&engine.devices)?;
        if report.rows_per_page == 0 {
            return Err(EngineError::InvalidConfig {
                field: "rows_per_page".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        let config = EngineConfig::new(
            engine.site,
            AttendancePolicy::new(office_end),
            engine.devices,
            report,
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn parse_office_end(value: &str) -> EngineResult<NaiveTime> {
        NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| EngineError::InvalidConfig {
            field: "office_end_time".to_string(),
            message: format!("expected HH:MM, got '{}' ({})", value, e),
        })
    }

    fn validate_devices(devices: &DeviceAliases) -> EngineResult<()> {
        if devices.entry_alias.is_empty() || devices.exit_alias.is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "devices".to_string(),
                message: "entry and exit aliases must not be empty".to_string(),
            });
        }
        if devices.entry_alias == devices.exit_alias {
            return Err(EngineError::InvalidConfig {
                field: "devices".to_string(),
                message: format!(
                    "entry and exit aliases must differ (both '{}')",
                    devices.entry_alias
                ),
            });
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the attendance policy.
    pub fn policy(&self) -> &AttendancePolicy {
        self.config.policy()
    }

    /// Returns the terminal aliases.
    pub fn devices(&self) -> &DeviceAliases {
        self.config.devices()
    }

    /// Returns the report settings.
    pub fn report(&self) -> &ReportSettings {
        self.config.report()
    }
}
