//! Configuration loading and management for the Attendance Engine.
//!
//! This module loads the office end time, the terminal aliases that mark
//! entry and exit devices, and the report settings from YAML files. The
//! resulting values are passed explicitly to the aggregators and the report
//! renderer.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded site: {}", config.config().site());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DeviceAliases, EngineConfig, EngineFile, ReportSettings};
