use chrono::{Days, NaiveDate};

/// Expands an inclusive date range into one entry per calendar day
///
/// Returns an empty vector when `start > end`.
///
/// # Arguments
/// * `start` - First day of the range
/// * `end` - Last day of the range, inclusive
///
/// # Returns
/// Vector of days in chronological order
pub fn expand_date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        current = match current.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };
    }
    days
}
