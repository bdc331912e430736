//! Core data models for the shift roster engine.
//!
//! This module contains the domain models shared by validation,
//! aggregation, and export.

mod preference;
mod roster;
mod shift_code;
mod week;

pub use preference::{EmployeePreferenceRow, PreferenceTable};
pub use roster::{Roster, RosterEntry};
pub use shift_code::ShiftCode;
pub use week::{DAYS_IN_WEEK, WEEK, day_index};
