//! Roster building logic.
//!
//! This module holds the two pure steps of the pipeline: validating a raw
//! preference table into admitted rows, and aggregating those rows into a
//! weekly roster.

mod aggregator;
mod validator;

pub use aggregator::aggregate;
pub use validator::validate;

use crate::config::LabelConfig;
use crate::error::RosterResult;
use crate::models::{PreferenceTable, Roster};

/// Validates `table` and aggregates the admitted rows into a roster.
///
/// # Example
///
/// ```
/// use shift_roster::config::LabelConfig;
/// use shift_roster::models::PreferenceTable;
/// use shift_roster::roster::build_roster;
///
/// let labels = LabelConfig::english();
/// let columns = labels.required_columns().into_iter().map(String::from).collect();
/// let roster = build_roster(&PreferenceTable::new(columns, vec![]), &labels).unwrap();
/// assert!(roster.is_empty());
/// ```
pub fn build_roster(table: &PreferenceTable, labels: &LabelConfig) -> RosterResult<Roster> {
    let rows = validate(table, labels)?;
    Ok(aggregate(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use chrono::Weekday;

    fn table(rows: &[&[&str]]) -> PreferenceTable {
        let labels = LabelConfig::english();
        PreferenceTable::new(
            labels
                .required_columns()
                .into_iter()
                .map(String::from)
                .collect(),
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_nameless_rows_never_reach_the_roster() {
        let roster = build_roster(
            &table(&[
                &["", "7-15", "", "", "", "", "", ""],
                &["Ann", "15-23", "", "", "", "", "", ""],
            ]),
            &LabelConfig::english(),
        )
        .unwrap();

        let monday = roster.entry(Weekday::Mon);
        assert!(monday.morning_employees.is_empty());
        assert_eq!(monday.evening_employees, vec!["Ann"]);
    }

    #[test]
    fn test_validation_errors_propagate() {
        let result = build_roster(
            &table(&[&["Ann", "", "", "9-17", "", "", "", ""]]),
            &LabelConfig::english(),
        );

        assert!(matches!(result, Err(RosterError::InvalidCellValue { row: 0, .. })));
    }
}
