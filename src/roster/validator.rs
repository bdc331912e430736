//! Preference validation.
//!
//! Turns a raw [`PreferenceTable`] into admitted [`EmployeePreferenceRow`]s:
//! every required column must be present, every weekday cell must hold a
//! known shift token, and rows without an employee name are dropped.

use tracing::{debug, warn};

use crate::config::LabelConfig;
use crate::error::{RosterError, RosterResult};
use crate::models::{DAYS_IN_WEEK, EmployeePreferenceRow, PreferenceTable, ShiftCode};

/// Column positions of the required columns within a table.
struct ColumnLayout {
    employee: usize,
    days: Vec<usize>,
}

impl ColumnLayout {
    /// Locates every required column, reporting all missing ones at once.
    fn resolve(table: &PreferenceTable, labels: &LabelConfig) -> RosterResult<Self> {
        let mut missing = Vec::new();

        let employee = table.column_index(&labels.employee_column);
        if employee.is_none() {
            missing.push(labels.employee_column.clone());
        }

        let days: Option<Vec<usize>> = labels
            .days
            .all()
            .into_iter()
            .map(|label| {
                let index = table.column_index(label);
                if index.is_none() {
                    missing.push(label.to_string());
                }
                index
            })
            .collect::<Vec<_>>()
            .into_iter()
            .collect();

        match (employee, days) {
            (Some(employee), Some(days)) if missing.is_empty() => Ok(Self { employee, days }),
            _ => Err(RosterError::MissingColumns { columns: missing }),
        }
    }
}

/// Validates a preference table and returns the admitted rows.
///
/// # Errors
///
/// - [`RosterError::MissingColumns`] listing every absent required column.
/// - [`RosterError::InvalidCellValue`] for the first weekday cell whose value
///   is not one of the configured shift tokens. Rows without an employee name
///   are checked too; the comparison is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use shift_roster::config::LabelConfig;
/// use shift_roster::models::{PreferenceTable, ShiftCode};
/// use shift_roster::roster::validate;
///
/// let labels = LabelConfig::english();
/// let columns = labels.required_columns().into_iter().map(String::from).collect();
/// let row = ["Ann", "7-15", "day-off", "", "", "", "", ""]
///     .into_iter()
///     .map(String::from)
///     .collect();
/// let table = PreferenceTable::new(columns, vec![row]);
///
/// let rows = validate(&table, &labels).unwrap();
/// assert_eq!(rows[0].name, "Ann");
/// assert_eq!(rows[0].shifts[0], ShiftCode::Morning);
/// ```
pub fn validate(
    table: &PreferenceTable,
    labels: &LabelConfig,
) -> RosterResult<Vec<EmployeePreferenceRow>> {
    let layout = ColumnLayout::resolve(table, labels).inspect_err(|err| {
        warn!(error = %err, "Preference table rejected");
    })?;

    let mut parsed = Vec::with_capacity(table.row_count());
    for row in 0..table.row_count() {
        let mut shifts = [ShiftCode::Unset; DAYS_IN_WEEK];
        for (slot, &column) in layout.days.iter().enumerate() {
            // Cells past the end of a short row carry no preference.
            let Some(value) = table.get(row, column) else {
                continue;
            };
            shifts[slot] = labels.shifts.parse(value).ok_or_else(|| {
                let err = RosterError::InvalidCellValue {
                    row,
                    column: table.columns[column].clone(),
                    value: value.to_string(),
                };
                warn!(error = %err, "Preference table rejected");
                err
            })?;
        }
        parsed.push((table.cell(row, layout.employee).trim(), shifts));
    }

    let admitted: Vec<EmployeePreferenceRow> = parsed
        .into_iter()
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, shifts)| EmployeePreferenceRow::new(name, shifts))
        .collect();

    debug!(
        rows = table.row_count(),
        admitted = admitted.len(),
        dropped = table.row_count() - admitted.len(),
        "Preference table validated"
    );

    Ok(admitted)
}
