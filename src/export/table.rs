//! Display table for a roster.

use serde::{Deserialize, Serialize};

use crate::config::LabelConfig;
use crate::models::Roster;

/// A roster laid out for display: one row per weekday with three cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterTable {
    /// Day, morning and evening column headers.
    pub headers: [String; 3],
    /// Rendered rows, Monday first.
    pub rows: Vec<[String; 3]>,
}

impl RosterTable {
    /// Renders `roster` with the labels of one locale.
    ///
    /// Names are joined with the configured separator; a shift nobody works
    /// shows the configured placeholder.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_roster::config::LabelConfig;
    /// use shift_roster::export::RosterTable;
    /// use shift_roster::roster::aggregate;
    ///
    /// let table = RosterTable::render(&aggregate(&[]), &LabelConfig::english());
    /// assert_eq!(table.headers, ["Day", "Morning", "Evening"]);
    /// assert_eq!(table.rows[0], ["Mon", "—", "—"]);
    /// ```
    pub fn render(roster: &Roster, labels: &LabelConfig) -> Self {
        let output = &labels.output;
        let join = |names: &[String]| {
            if names.is_empty() {
                output.empty_placeholder.clone()
            } else {
                names.join(output.name_separator.as_str())
            }
        };

        let rows = roster
            .entries()
            .iter()
            .map(|entry| {
                [
                    labels.days.label(entry.day).to_string(),
                    join(&entry.morning_employees),
                    join(&entry.evening_employees),
                ]
            })
            .collect();

        Self {
            headers: [
                output.day_column.clone(),
                output.morning_column.clone(),
                output.evening_column.clone(),
            ],
            rows,
        }
    }
}
