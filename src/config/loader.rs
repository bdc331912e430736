//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading roster label
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{RosterError, RosterResult};

use super::types::{FormLimits, LabelConfig};

/// Loads and provides access to roster configuration.
///
/// # Directory Structure
///
/// ```text
/// config/en/
/// ├── labels.yaml   # Column names, shift tokens, output headers
/// └── form.yaml     # Manual entry form limits
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ru").unwrap();
/// println!("Employee column: {}", loader.labels().employee_column);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    labels: LabelConfig,
    limits: FormLimits,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing
    /// - Either file contains invalid YAML
    /// - The labels are ambiguous (see [`LabelConfig::validate`])
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();

        let labels = Self::load_yaml::<LabelConfig>(&path.join("labels.yaml"))?;
        let limits = Self::load_yaml::<FormLimits>(&path.join("form.yaml"))?;

        let loader = Self::from_parts(labels, limits)?;
        debug!(
            locale = %loader.labels.locale,
            max_employees = loader.limits.max_employees,
            "Loaded roster configuration"
        );
        Ok(loader)
    }

    /// Builds a loader from in-memory configuration, validating the labels.
    pub fn from_parts(labels: LabelConfig, limits: FormLimits) -> RosterResult<Self> {
        labels.validate()?;
        Ok(Self { labels, limits })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RosterResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RosterError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the label configuration.
    pub fn labels(&self) -> &LabelConfig {
        &self.labels
    }

    /// Returns the manual entry form limits.
    pub fn limits(&self) -> FormLimits {
        self.limits
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            labels: LabelConfig::english(),
            limits: FormLimits::default(),
        }
    }
}
