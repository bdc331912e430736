//! Roster aggregation.
//!
//! Groups admitted preference rows by day and shift.

use crate::models::{EmployeePreferenceRow, Roster, RosterEntry, ShiftCode, WEEK};

/// Builds the weekly roster from admitted preference rows.
///
/// The result always holds seven entries, Monday to Sunday. Within each
/// entry, names keep the order of `rows`. Day-off and unset codes put the
/// employee on neither list.
///
/// # Example
///
/// ```
/// use shift_roster::models::{EmployeePreferenceRow, ShiftCode};
/// use shift_roster::roster::aggregate;
/// use chrono::Weekday;
///
/// let mut shifts = [ShiftCode::DayOff; 7];
/// shifts[0] = ShiftCode::Morning;
/// let roster = aggregate(&[EmployeePreferenceRow::new("Ann", shifts)]);
///
/// assert_eq!(roster.entries().len(), 7);
/// assert_eq!(roster.entry(Weekday::Mon).morning_employees, vec!["Ann"]);
/// assert!(roster.entry(Weekday::Tue).is_empty());
/// ```
pub fn aggregate(rows: &[EmployeePreferenceRow]) -> Roster {
    let mut entries: Vec<RosterEntry> = WEEK.iter().map(|day| RosterEntry::empty(*day)).collect();

    for row in rows {
        for (entry, code) in entries.iter_mut().zip(row.shifts) {
            match code {
                ShiftCode::Morning => entry.morning_employees.push(row.name.clone()),
                ShiftCode::Evening => entry.evening_employees.push(row.name.clone()),
                ShiftCode::DayOff | ShiftCode::Unset => {}
            }
        }
    }

    Roster::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DAYS_IN_WEEK;
    use chrono::Weekday;
    use proptest::prelude::*;

    fn row(name: &str, shifts: [ShiftCode; DAYS_IN_WEEK]) -> EmployeePreferenceRow {
        EmployeePreferenceRow::new(name, shifts)
    }

    fn with_day(day: Weekday, code: ShiftCode) -> [ShiftCode; DAYS_IN_WEEK] {
        let mut shifts = [ShiftCode::DayOff; DAYS_IN_WEEK];
        shifts[day.num_days_from_monday() as usize] = code;
        shifts
    }

    #[test]
    fn test_single_morning_on_monday() {
        let roster = aggregate(&[row("Ann", with_day(Weekday::Mon, ShiftCode::Morning))]);

        let monday = roster.entry(Weekday::Mon);
        assert_eq!(monday.morning_employees, vec!["Ann"]);
        assert!(monday.evening_employees.is_empty());
        for day in &WEEK[1..] {
            assert!(roster.entry(*day).is_empty(), "{day} should be empty");
        }
    }

    #[test]
    fn test_evening_order_follows_input_not_alphabet() {
        let roster = aggregate(&[
            row("Cid", with_day(Weekday::Tue, ShiftCode::Evening)),
            row("Bob", with_day(Weekday::Tue, ShiftCode::Evening)),
        ]);

        assert_eq!(
            roster.entry(Weekday::Tue).evening_employees,
            vec!["Cid", "Bob"]
        );
    }

    #[test]
    fn test_two_evening_employees_on_tuesday() {
        let roster = aggregate(&[
            row("Bob", with_day(Weekday::Tue, ShiftCode::Evening)),
            row("Cid", with_day(Weekday::Tue, ShiftCode::Evening)),
        ]);

        assert_eq!(
            roster.entry(Weekday::Tue).evening_employees,
            vec!["Bob", "Cid"]
        );
        assert!(roster.entry(Weekday::Tue).morning_employees.is_empty());
    }

    #[test]
    fn test_day_off_and_unset_are_omitted() {
        let roster = aggregate(&[
            row("Ann", [ShiftCode::DayOff; DAYS_IN_WEEK]),
            row("Bob", [ShiftCode::Unset; DAYS_IN_WEEK]),
        ]);

        assert!(roster.is_empty());
    }

    #[test]
    fn test_empty_input_yields_seven_empty_days() {
        let roster = aggregate(&[]);

        let days: Vec<Weekday> = roster.entries().iter().map(|entry| entry.day).collect();
        assert_eq!(days, WEEK.to_vec());
        assert!(roster.is_empty());
    }

    #[test]
    fn test_mixed_week() {
        let roster = aggregate(&[
            row(
                "Ann",
                [
                    ShiftCode::Morning,
                    ShiftCode::Morning,
                    ShiftCode::Evening,
                    ShiftCode::DayOff,
                    ShiftCode::Unset,
                    ShiftCode::Evening,
                    ShiftCode::DayOff,
                ],
            ),
            row(
                "Bob",
                [
                    ShiftCode::Evening,
                    ShiftCode::Morning,
                    ShiftCode::DayOff,
                    ShiftCode::DayOff,
                    ShiftCode::Morning,
                    ShiftCode::Evening,
                    ShiftCode::Unset,
                ],
            ),
        ]);

        assert_eq!(roster.entry(Weekday::Mon).morning_employees, vec!["Ann"]);
        assert_eq!(roster.entry(Weekday::Mon).evening_employees, vec!["Bob"]);
        assert_eq!(
            roster.entry(Weekday::Tue).morning_employees,
            vec!["Ann", "Bob"]
        );
        assert_eq!(roster.entry(Weekday::Wed).evening_employees, vec!["Ann"]);
        assert!(roster.entry(Weekday::Thu).is_empty());
        assert_eq!(roster.entry(Weekday::Fri).morning_employees, vec!["Bob"]);
        assert_eq!(
            roster.entry(Weekday::Sat).evening_employees,
            vec!["Ann", "Bob"]
        );
        assert!(roster.entry(Weekday::Sun).is_empty());
    }

    fn shift_code() -> impl Strategy<Value = ShiftCode> {
        prop::sample::select(ShiftCode::ALL.to_vec())
    }

    fn preference_rows() -> impl Strategy<Value = Vec<EmployeePreferenceRow>> {
        prop::collection::vec(prop::array::uniform7(shift_code()), 0..20).prop_map(|weeks| {
            weeks
                .into_iter()
                .enumerate()
                .map(|(index, shifts)| row(&format!("emp_{index:02}"), shifts))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_always_seven_days_in_order(rows in preference_rows()) {
            let roster = aggregate(&rows);
            let days: Vec<Weekday> = roster.entries().iter().map(|entry| entry.day).collect();
            prop_assert_eq!(days, WEEK.to_vec());
        }

        #[test]
        fn prop_aggregation_is_deterministic(rows in preference_rows()) {
            prop_assert_eq!(aggregate(&rows), aggregate(&rows));
        }

        #[test]
        fn prop_lists_match_filtered_input_order(rows in preference_rows()) {
            let roster = aggregate(&rows);
            for (index, entry) in roster.entries().iter().enumerate() {
                let expected_morning: Vec<&str> = rows
                    .iter()
                    .filter(|r| r.shifts[index] == ShiftCode::Morning)
                    .map(|r| r.name.as_str())
                    .collect();
                let expected_evening: Vec<&str> = rows
                    .iter()
                    .filter(|r| r.shifts[index] == ShiftCode::Evening)
                    .map(|r| r.name.as_str())
                    .collect();
                prop_assert_eq!(&entry.morning_employees, &expected_morning);
                prop_assert_eq!(&entry.evening_employees, &expected_evening);
            }
        }

        #[test]
        fn prop_no_employee_on_both_shifts(rows in preference_rows()) {
            let roster = aggregate(&rows);
            for entry in roster.entries() {
                for name in &entry.morning_employees {
                    prop_assert!(!entry.evening_employees.contains(name));
                }
            }
        }
    }
}
