//! Configuration loading and management for the shift roster engine.
//!
//! This module provides functionality to load label configurations from YAML
//! files: the input column names, the shift code tokens, and the headers used
//! when rendering a roster.
//!
//! # Example
//!
//! ```no_run
//! use shift_roster::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/en").unwrap();
//! println!("Loaded locale: {}", config.labels().locale);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DayLabels, FormLimits, LabelConfig, OutputLabels, ShiftLabels};
