use chrono::NaiveDateTime;
use thiserror::Error;

/// Failures raised by the validating date operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The date argument was absent, unparseable or not a real calendar date.
    #[error("Invalid date provided")]
    InvalidDate,

    /// The amount was absent, NaN, infinite, or too large to apply.
    #[error("Invalid amount provided")]
    InvalidAmount,

    #[error("Invalid range: from date must be before to date")]
    InvalidRange {
        from: NaiveDateTime,
        to: NaiveDateTime
    }
}
