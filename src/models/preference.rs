//! Preference input models.
//!
//! [`PreferenceTable`] is the raw tabular input handed over by an upload or
//! form, and [`EmployeePreferenceRow`] is one validated employee record.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::shift_code::ShiftCode;
use super::week::{DAYS_IN_WEEK, day_index};

/// Raw tabular preference data with named columns.
///
/// Rows may be shorter than the header. [`PreferenceTable::cell`] reads a
/// missing trailing cell as an empty string, [`PreferenceTable::get`] as
/// `None`.
///
/// # Example
///
/// ```
/// use shift_roster::models::PreferenceTable;
///
/// let table = PreferenceTable::new(
///     vec!["Employee".to_string(), "Mon".to_string()],
///     vec![vec!["Ann".to_string()]],
/// );
/// assert_eq!(table.cell(0, 0), "Ann");
/// assert_eq!(table.cell(0, 1), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceTable {
    /// Column names, in input order.
    pub columns: Vec<String>,
    /// Cell values, one vector per row.
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl PreferenceTable {
    /// Creates a table from a header and its rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Returns the index of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Returns the cell at `row`/`column`, or `""` when the row is short.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.get(row, column).unwrap_or("")
    }

    /// Returns the cell at `row`/`column`, or `None` past the end of the row.
    pub fn get(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
    }

    /// Returns the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One employee's validated shift preferences for the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePreferenceRow {
    /// The employee's name, trimmed and non-empty.
    pub name: String,
    /// Requested shift per day, Monday first.
    pub shifts: [ShiftCode; DAYS_IN_WEEK],
}

impl EmployeePreferenceRow {
    /// Creates a row from a name and a Monday-first week of shift codes.
    pub fn new(name: impl Into<String>, shifts: [ShiftCode; DAYS_IN_WEEK]) -> Self {
        Self {
            name: name.into(),
            shifts,
        }
    }

    /// Returns the requested shift for `day`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_roster::models::{EmployeePreferenceRow, ShiftCode};
    /// use chrono::Weekday;
    ///
    /// let mut shifts = [ShiftCode::DayOff; 7];
    /// shifts[2] = ShiftCode::Evening;
    /// let row = EmployeePreferenceRow::new("Ann", shifts);
    /// assert_eq!(row.shift_on(Weekday::Wed), ShiftCode::Evening);
    /// assert_eq!(row.shift_on(Weekday::Thu), ShiftCode::DayOff);
    /// ```
    pub fn shift_on(&self, day: Weekday) -> ShiftCode {
        self.shifts[day_index(day)]
    }
}
