//! Roster output models.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::RosterError;

use super::week::{DAYS_IN_WEEK, WEEK, day_index};

/// Who works the morning and evening shift on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// The day this entry covers.
    pub day: Weekday,
    /// Employees on the morning shift, in input row order.
    pub morning_employees: Vec<String>,
    /// Employees on the evening shift, in input row order.
    pub evening_employees: Vec<String>,
}

impl RosterEntry {
    /// Creates an entry for `day` with no one assigned.
    pub fn empty(day: Weekday) -> Self {
        Self {
            day,
            morning_employees: Vec::new(),
            evening_employees: Vec::new(),
        }
    }

    /// Returns true if nobody works on this day.
    pub fn is_empty(&self) -> bool {
        self.morning_employees.is_empty() && self.evening_employees.is_empty()
    }
}

/// A weekly roster: exactly one [`RosterEntry`] per weekday, Monday first.
///
/// Deserialization rejects any list that is not seven entries ordered Monday
/// to Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RosterEntry>", into = "Vec<RosterEntry>")]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Wraps entries already laid out Monday to Sunday.
    pub(crate) fn from_entries(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    /// Returns all entries, Monday first.
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Returns the entry for `day`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_roster::roster::aggregate;
    /// use chrono::Weekday;
    ///
    /// let roster = aggregate(&[]);
    /// assert_eq!(roster.entry(Weekday::Fri).day, Weekday::Fri);
    /// ```
    pub fn entry(&self, day: Weekday) -> &RosterEntry {
        &self.entries[day_index(day)]
    }

    /// Returns true if nobody works on any day.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(RosterEntry::is_empty)
    }
}

impl TryFrom<Vec<RosterEntry>> for Roster {
    type Error = RosterError;

    fn try_from(entries: Vec<RosterEntry>) -> Result<Self, Self::Error> {
        if entries.len() != DAYS_IN_WEEK {
            return Err(RosterError::MalformedInput {
                message: format!(
                    "roster must have {DAYS_IN_WEEK} entries, found {}",
                    entries.len()
                ),
            });
        }

        if let Some((expected, entry)) = WEEK
            .iter()
            .zip(&entries)
            .find(|(expected, entry)| entry.day != **expected)
        {
            return Err(RosterError::MalformedInput {
                message: format!("roster entry for {expected} found {}", entry.day),
            });
        }

        Ok(Self { entries })
    }
}

impl From<Roster> for Vec<RosterEntry> {
    fn from(roster: Roster) -> Self {
        roster.entries
    }
}
