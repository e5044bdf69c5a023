use chrono::NaiveDateTime;

use crate::time::dateerror::DateError;

/// Closed interval `[start, end]` of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeOfDates {
    start: NaiveDateTime,
    end: NaiveDateTime
}

impl RangeOfDates {
    /// Fails with `InvalidRange` when `start` is after `end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<RangeOfDates, DateError> {
        if start > end {
            Err(DateError::InvalidRange { from: start, to: end })
        } else {
            Ok(RangeOfDates { start, end })
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Inclusive of both endpoints, compared with full time-of-day precision.
    pub fn contain(&self, d: NaiveDateTime) -> bool {
        (d >= self.start) && (d <= self.end)
    }
}
