//! Shift code model.
//!
//! A [`ShiftCode`] is the closed set of values an employee can request for a
//! single day. Textual forms live in [`ShiftLabels`](crate::config::ShiftLabels)
//! so that every locale maps onto the same variants.

use serde::{Deserialize, Serialize};

/// A requested shift for one employee on one day.
///
/// # Example
///
/// ```
/// use shift_roster::models::ShiftCode;
///
/// assert!(ShiftCode::Morning.is_working());
/// assert!(!ShiftCode::DayOff.is_working());
/// assert_eq!(ShiftCode::default(), ShiftCode::Unset);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCode {
    /// Morning shift, 07:00 to 15:00.
    Morning,
    /// Evening shift, 15:00 to 23:00.
    Evening,
    /// Requested day off.
    DayOff,
    /// No preference given.
    #[default]
    Unset,
}

impl ShiftCode {
    /// Every shift code, in the order a selection list presents them.
    pub const ALL: [ShiftCode; 4] = [
        ShiftCode::Unset,
        ShiftCode::Morning,
        ShiftCode::Evening,
        ShiftCode::DayOff,
    ];

    /// Returns true for codes that put the employee on the roster.
    pub fn is_working(self) -> bool {
        matches!(self, ShiftCode::Morning | ShiftCode::Evening)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_morning_and_evening_are_working() {
        let working: Vec<ShiftCode> = ShiftCode::ALL
            .into_iter()
            .filter(|code| code.is_working())
            .collect();
        assert_eq!(working, vec![ShiftCode::Morning, ShiftCode::Evening]);
    }

    #[test]
    fn test_shift_code_serialization() {
        assert_eq!(
            serde_json::to_string(&ShiftCode::DayOff).unwrap(),
            "\"day_off\""
        );
        assert_eq!(
            serde_json::from_str::<ShiftCode>("\"morning\"").unwrap(),
            ShiftCode::Morning
        );
    }

    #[test]
    fn test_unknown_shift_code_is_rejected() {
        assert!(serde_json::from_str::<ShiftCode>("\"night\"").is_err());
    }
}
