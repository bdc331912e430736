//! Shift Roster Engine
//!
//! This crate turns employees' weekly shift preferences into a roster of who
//! works the morning and evening shift on each day. Preference tables are
//! validated against a configurable label set, aggregated per weekday, and
//! rendered or exported to a spreadsheet.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod models;
pub mod roster;
