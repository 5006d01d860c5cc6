//! Application state for the Attendance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::source::PunchSource;

/// Shared application state.
///
/// Holds the loaded configuration and the punch store. Both are read-only
/// once the server starts.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    source: Arc<dyn PunchSource>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, source: impl PunchSource + 'static) -> Self {
        Self {
            config: Arc::new(config),
            source: Arc::new(source),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the punch store.
    pub fn source(&self) -> &dyn PunchSource {
        self.source.as_ref()
    }
}
