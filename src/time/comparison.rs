use chrono::NaiveDateTime;

use crate::time::dateerror::DateError;
use crate::time::rangeofdates::RangeOfDates;

/// Whether `from <= date <= to`. Fails before testing membership when
/// `from` is after `to`.
pub fn is_within_range(date: NaiveDateTime,
                       from: NaiveDateTime,
                       to: NaiveDateTime) -> Result<bool, DateError> {
    RangeOfDates::new(from, to).map(|range| range.contain(date))
}

pub fn is_date_before(date: NaiveDateTime, compare_date: NaiveDateTime) -> bool {
    date < compare_date
}

/// Same calendar day, ignoring time of day.
pub fn is_same_day(date: NaiveDateTime, compare_date: NaiveDateTime) -> bool {
    date.date() == compare_date.date()
}
