//! Configuration types for roster labels and form limits.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashSet;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};
use crate::models::{ShiftCode, WEEK};

/// Column labels for the seven weekdays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLabels {
    /// Monday.
    pub mon: String,
    /// Tuesday.
    pub tue: String,
    /// Wednesday.
    pub wed: String,
    /// Thursday.
    pub thu: String,
    /// Friday.
    pub fri: String,
    /// Saturday.
    pub sat: String,
    /// Sunday.
    pub sun: String,
}

impl DayLabels {
    /// Returns the label for `day`.
    pub fn label(&self, day: Weekday) -> &str {
        match day {
            Weekday::Mon => &self.mon,
            Weekday::Tue => &self.tue,
            Weekday::Wed => &self.wed,
            Weekday::Thu => &self.thu,
            Weekday::Fri => &self.fri,
            Weekday::Sat => &self.sat,
            Weekday::Sun => &self.sun,
        }
    }

    /// Returns all labels, Monday first.
    pub fn all(&self) -> [&str; 7] {
        WEEK.map(|day| self.label(day))
    }
}

/// Textual forms of each [`ShiftCode`] as they appear in input cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftLabels {
    /// Morning shift token, e.g. `7-15`.
    pub morning: String,
    /// Evening shift token, e.g. `15-23`.
    pub evening: String,
    /// Day-off token.
    pub day_off: String,
    /// Token for "no preference"; an empty cell unless configured otherwise.
    #[serde(default)]
    pub unset: String,
}

impl ShiftLabels {
    /// Returns the textual form of `code`.
    pub fn label(&self, code: ShiftCode) -> &str {
        match code {
            ShiftCode::Morning => &self.morning,
            ShiftCode::Evening => &self.evening,
            ShiftCode::DayOff => &self.day_off,
            ShiftCode::Unset => &self.unset,
        }
    }

    /// Maps a cell value onto a shift code with an exact, case-sensitive match.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_roster::config::LabelConfig;
    /// use shift_roster::models::ShiftCode;
    ///
    /// let shifts = LabelConfig::english().shifts;
    /// assert_eq!(shifts.parse("15-23"), Some(ShiftCode::Evening));
    /// assert_eq!(shifts.parse(""), Some(ShiftCode::Unset));
    /// assert_eq!(shifts.parse("Day-Off"), None);
    /// ```
    pub fn parse(&self, value: &str) -> Option<ShiftCode> {
        ShiftCode::ALL
            .into_iter()
            .find(|code| self.label(*code) == value)
    }
}

/// Labels used when rendering and exporting a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLabels {
    /// Header of the weekday column.
    pub day_column: String,
    /// Header of the morning shift column.
    pub morning_column: String,
    /// Header of the evening shift column.
    pub evening_column: String,
    /// Worksheet name in the exported workbook.
    pub sheet_name: String,
    /// Suggested download file name.
    pub file_name: String,
    /// Text shown for a shift nobody works.
    #[serde(default = "default_empty_placeholder")]
    pub empty_placeholder: String,
    /// Separator placed between employee names.
    #[serde(default = "default_name_separator")]
    pub name_separator: String,
}

fn default_empty_placeholder() -> String {
    "—".to_string()
}

fn default_name_separator() -> String {
    ", ".to_string()
}

/// The complete label set for one locale.
///
/// Column names, shift tokens and output headers all come from here, so the
/// validation and aggregation logic stays locale independent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Locale identifier, e.g. `en`.
    pub locale: String,
    /// Name of the column holding employee names.
    pub employee_column: String,
    /// Weekday column names.
    pub days: DayLabels,
    /// Shift code tokens.
    pub shifts: ShiftLabels,
    /// Rendering and export labels.
    pub output: OutputLabels,
}

impl LabelConfig {
    /// English labels: `Employee`, `Mon`..`Sun`, `7-15`, `15-23`, `day-off`.
    pub fn english() -> Self {
        Self {
            locale: "en".to_string(),
            employee_column: "Employee".to_string(),
            days: DayLabels {
                mon: "Mon".to_string(),
                tue: "Tue".to_string(),
                wed: "Wed".to_string(),
                thu: "Thu".to_string(),
                fri: "Fri".to_string(),
                sat: "Sat".to_string(),
                sun: "Sun".to_string(),
            },
            shifts: ShiftLabels {
                morning: "7-15".to_string(),
                evening: "15-23".to_string(),
                day_off: "day-off".to_string(),
                unset: String::new(),
            },
            output: OutputLabels {
                day_column: "Day".to_string(),
                morning_column: "Morning".to_string(),
                evening_column: "Evening".to_string(),
                sheet_name: "Shift roster".to_string(),
                file_name: "shift_roster.xlsx".to_string(),
                empty_placeholder: default_empty_placeholder(),
                name_separator: default_name_separator(),
            },
        }
    }

    /// Russian labels: `Сотрудник`, `Пн`..`Вс`, `7-15`, `15-23`, `выходной`.
    pub fn russian() -> Self {
        Self {
            locale: "ru".to_string(),
            employee_column: "Сотрудник".to_string(),
            days: DayLabels {
                mon: "Пн".to_string(),
                tue: "Вт".to_string(),
                wed: "Ср".to_string(),
                thu: "Чт".to_string(),
                fri: "Пт".to_string(),
                sat: "Сб".to_string(),
                sun: "Вс".to_string(),
            },
            shifts: ShiftLabels {
                morning: "7-15".to_string(),
                evening: "15-23".to_string(),
                day_off: "выходной".to_string(),
                unset: String::new(),
            },
            output: OutputLabels {
                day_column: "День недели".to_string(),
                morning_column: "Утренняя смена (7-15)".to_string(),
                evening_column: "Вечерняя смена (15-23)".to_string(),
                sheet_name: "График смен".to_string(),
                file_name: "график_смен.xlsx".to_string(),
                empty_placeholder: default_empty_placeholder(),
                name_separator: default_name_separator(),
            },
        }
    }

    /// Returns the required input columns: the employee column, then Mon..Sun.
    pub fn required_columns(&self) -> Vec<&str> {
        std::iter::once(self.employee_column.as_str())
            .chain(self.days.all())
            .collect()
    }

    /// Checks that the labels can be told apart unambiguously.
    pub fn validate(&self) -> RosterResult<()> {
        let columns = self.required_columns();
        if columns.iter().any(|column| column.trim().is_empty()) {
            return Err(invalid("column labels must not be empty"));
        }
        let distinct: HashSet<&str> = columns.iter().copied().collect();
        if distinct.len() != columns.len() {
            return Err(invalid("column labels must be distinct"));
        }

        let work_tokens = [
            self.shifts.morning.as_str(),
            self.shifts.evening.as_str(),
            self.shifts.day_off.as_str(),
        ];
        if work_tokens.iter().any(|token| token.is_empty()) {
            return Err(invalid(
                "morning, evening and day-off tokens must not be empty",
            ));
        }
        let tokens: HashSet<&str> = ShiftCode::ALL
            .iter()
            .map(|code| self.shifts.label(*code))
            .collect();
        if tokens.len() != ShiftCode::ALL.len() {
            return Err(invalid("shift tokens must be distinct"));
        }

        Ok(())
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self::english()
    }
}

fn invalid(message: &str) -> RosterError {
    RosterError::InvalidConfig {
        message: message.to_string(),
    }
}

/// Limits applied to the manual entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormLimits {
    /// Maximum number of employees one form may hold.
    #[serde(default = "default_max_employees")]
    pub max_employees: usize,
}

fn default_max_employees() -> usize {
    50
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            max_employees: default_max_employees(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_presets_are_valid() {
        assert!(LabelConfig::english().validate().is_ok());
        assert!(LabelConfig::russian().validate().is_ok());
    }

    #[test]
    fn test_required_columns_start_with_employee() {
        let labels = LabelConfig::english();
        assert_eq!(
            labels.required_columns(),
            vec!["Employee", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
    }

    #[test]
    fn test_russian_day_labels_in_order() {
        let labels = LabelConfig::russian();
        assert_eq!(
            labels.days.all(),
            ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"]
        );
        assert_eq!(labels.shifts.parse("выходной"), Some(ShiftCode::DayOff));
    }

    #[test]
    fn test_shift_label_round_trips_every_code() {
        let shifts = LabelConfig::english().shifts;
        for code in ShiftCode::ALL {
            assert_eq!(shifts.parse(shifts.label(code)), Some(code));
        }
    }

    #[test]
    fn test_duplicate_day_labels_are_rejected() {
        let mut labels = LabelConfig::english();
        labels.days.sun = "Sat".to_string();
        assert!(matches!(
            labels.validate(),
            Err(RosterError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_day_label_clashing_with_employee_column_is_rejected() {
        let mut labels = LabelConfig::english();
        labels.employee_column = "Mon".to_string();
        assert!(labels.validate().is_err());
    }

    #[test]
    fn test_duplicate_shift_tokens_are_rejected() {
        let mut labels = LabelConfig::english();
        labels.shifts.evening = "7-15".to_string();
        assert!(labels.validate().is_err());
    }

    #[test]
    fn test_empty_day_off_token_is_rejected() {
        let mut labels = LabelConfig::english();
        labels.shifts.day_off = String::new();
        assert!(labels.validate().is_err());
    }

    #[test]
    fn test_output_defaults_apply_when_omitted() {
        let yaml = r#"
day_column: Day
morning_column: Morning
evening_column: Evening
sheet_name: Roster
file_name: roster.xlsx
"#;
        let output: OutputLabels = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(output.empty_placeholder, "—");
        assert_eq!(output.name_separator, ", ");
    }

    #[test]
    fn test_form_limits_default_to_fifty() {
        assert_eq!(FormLimits::default().max_employees, 50);
        let limits: FormLimits = serde_yaml::from_str("{}").unwrap();
        assert_eq!(limits.max_employees, 50);
    }
}
