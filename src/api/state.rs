//! Application state for the roster API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, FormLimits, LabelConfig};

/// Shared application state.
///
/// Holds the loaded label configuration; it is read-only for the lifetime of
/// the server.
#[derive(Clone)]
pub struct AppState {
    /// The loaded roster configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the label configuration.
    pub fn labels(&self) -> &LabelConfig {
        self.config.labels()
    }

    /// Returns the manual entry form limits.
    pub fn limits(&self) -> FormLimits {
        self.config.limits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_exposes_loaded_labels() {
        let state = AppState::new(ConfigLoader::default());
        assert_eq!(state.labels().locale, "en");
        assert_eq!(state.limits().max_employees, 50);
    }
}
