//! The fixed weekday set a roster covers.

use chrono::Weekday;

/// Number of days in a roster week.
pub const DAYS_IN_WEEK: usize = 7;

/// The canonical weekday order, Monday first.
///
/// # Example
///
/// ```
/// use shift_roster::models::WEEK;
/// use chrono::Weekday;
///
/// assert_eq!(WEEK[0], Weekday::Mon);
/// assert_eq!(WEEK[6], Weekday::Sun);
/// ```
pub const WEEK: [Weekday; DAYS_IN_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Returns the position of `day` within [`WEEK`].
pub fn day_index(day: Weekday) -> usize {
    day.num_days_from_monday() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_index_matches_week_order() {
        for (index, day) in WEEK.iter().enumerate() {
            assert_eq!(day_index(*day), index);
        }
    }

    #[test]
    fn test_week_follows_chrono_succession() {
        for pair in WEEK.windows(2) {
            assert_eq!(pair[0].succ(), pair[1]);
        }
    }
}
