//! Manual entry form.
//!
//! The form is filled in by a caller that only offers the closed set of
//! shift codes, so its values never need cell-level validation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{FormLimits, LabelConfig};
use crate::error::{RosterError, RosterResult};
use crate::models::{DAYS_IN_WEEK, EmployeePreferenceRow, PreferenceTable, ShiftCode};

/// One employee's entry on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualEntry {
    /// The employee's name as typed; may be blank.
    #[serde(default)]
    pub name: String,
    /// Selected shift per day, Monday first.
    #[serde(default)]
    pub shifts: [ShiftCode; DAYS_IN_WEEK],
}

/// A complete manual entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualEntryForm {
    /// Entries in the order they were filled in.
    #[serde(default)]
    pub employees: Vec<ManualEntry>,
}

impl ManualEntryForm {
    /// Converts the form into admitted preference rows.
    ///
    /// Entries with a blank name are skipped; the rest keep their order and
    /// are stored with trimmed names.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::TooManyEmployees`] if the form holds more
    /// entries than `limits.max_employees`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_roster::config::FormLimits;
    /// use shift_roster::input::{ManualEntry, ManualEntryForm};
    ///
    /// let form = ManualEntryForm {
    ///     employees: vec![
    ///         ManualEntry { name: "Ann".to_string(), ..Default::default() },
    ///         ManualEntry::default(),
    ///     ],
    /// };
    /// let rows = form.into_rows(FormLimits::default()).unwrap();
    /// assert_eq!(rows.len(), 1);
    /// ```
    pub fn into_rows(self, limits: FormLimits) -> RosterResult<Vec<EmployeePreferenceRow>> {
        let count = self.employees.len();
        if count > limits.max_employees {
            return Err(RosterError::TooManyEmployees {
                count,
                max: limits.max_employees,
            });
        }

        let rows: Vec<EmployeePreferenceRow> = self
            .employees
            .into_iter()
            .filter_map(|entry| {
                let name = entry.name.trim();
                (!name.is_empty()).then(|| EmployeePreferenceRow::new(name, entry.shifts))
            })
            .collect();

        debug!(entries = count, admitted = rows.len(), "Manual form converted");
        Ok(rows)
    }

    /// Renders the form as a preference table using the configured labels.
    pub fn to_table(&self, labels: &LabelConfig) -> PreferenceTable {
        let columns = labels
            .required_columns()
            .into_iter()
            .map(String::from)
            .collect();

        let rows = self
            .employees
            .iter()
            .map(|entry| {
                std::iter::once(entry.name.clone())
                    .chain(
                        entry
                            .shifts
                            .iter()
                            .map(|code| labels.shifts.label(*code).to_string()),
                    )
                    .collect()
            })
            .collect();

        PreferenceTable::new(columns, rows)
    }
}
