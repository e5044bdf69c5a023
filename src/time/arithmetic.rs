use chrono::NaiveDateTime;
use tracing::debug;

use crate::time::dateerror::DateError;
use crate::time::dateunit::DateUnit;
use crate::time::instant::{
    AsAmount,
    AsInstant
};
use crate::time::period::Period;

/// Converts a finite amount of `unit` into a whole-unit `Period`.
///
/// Weeks are scaled to days and years to months before truncating toward
/// zero, so `1.5` weeks is 10 days and `0.5` years is 6 months.
fn to_period(amount: f64, unit: DateUnit) -> Option<Period> {
    let period_unit = if unit.is_month_based() {
        DateUnit::Months
    } else {
        DateUnit::Days
    };
    let scale = match unit {
        DateUnit::Weeks => 7.0,
        DateUnit::Years => 12.0,
        DateUnit::Days | DateUnit::Months => 1.0
    };
    let truncated = (amount * scale).trunc();
    if truncated < i32::MIN as f64 || truncated > i32::MAX as f64 {
        return None;
    }
    Some(Period::new(truncated as i32, period_unit))
}

/// Adds `amount` units to `date`, returning a new instant.
///
/// The date is validated before the amount. Negative amounts subtract.
/// Month and year shifts clamp to the end of the target month.
///
/// Fractional amounts are scaled to days or months and truncated toward
/// zero before they are applied, never rounded toward the past: `-2.9`
/// days moves back exactly two days and `-1.5` months moves back one month.
pub fn add<D, A>(date: D, amount: A, unit: DateUnit) -> Result<NaiveDateTime, DateError>
where
    D: AsInstant,
    A: AsAmount
{
    let date = date.as_instant().ok_or(DateError::InvalidDate)?;
    let amount = amount.as_amount().ok_or(DateError::InvalidAmount)?;
    let result = to_period(amount, unit)
        .and_then(|period| period.checked_add_to_datetime(date))
        .ok_or(DateError::InvalidAmount)?;
    debug!(%date, amount, %unit, %result, "shifted date");
    Ok(result)
}

pub fn add_days<D, A>(date: D, amount: A) -> Result<NaiveDateTime, DateError>
where
    D: AsInstant,
    A: AsAmount
{
    add(date, amount, DateUnit::default())
}
