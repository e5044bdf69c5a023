use std::fmt;
use std::ops::{Add, Sub};
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{
    Datelike,
    Days,
    NaiveDate,
    NaiveDateTime
};
use thiserror::Error;

use crate::time::dateunit::DateUnit;
use crate::time::utility::days_of_month;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePeriodError {
    #[error("empty period string")]
    Empty,
    #[error("unknown time unit '{0}' found")]
    UnknownTimeUnit(char),
    #[error(transparent)]
    Parse(#[from] ParseIntError)
}

/// A signed number of date units, e.g. `3M` or `-5D`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Period {
    number: i32,
    unit: DateUnit
}

impl Period {
    pub fn new(number: i32, unit: DateUnit) -> Period {
        Period { number, unit }
    }

    pub fn days(number: i32) -> Period {
        Period::new(number, DateUnit::Days)
    }

    pub fn weeks(number: i32) -> Period {
        Period::new(number, DateUnit::Weeks)
    }

    pub fn months(number: i32) -> Period {
        Period::new(number, DateUnit::Months)
    }

    pub fn years(number: i32) -> Period {
        Period::new(number, DateUnit::Years)
    }

    /// Parses a tenor string such as `"10Y"`, `"2W"` or `"-5D"`.
    pub fn parse(period_str: &str) -> Result<Period, ParsePeriodError> {
        let period_str = period_str.trim();
        let unit_chr = period_str.chars().last().ok_or(ParsePeriodError::Empty)?;
        let unit = DateUnit::from_char(unit_chr)
            .ok_or(ParsePeriodError::UnknownTimeUnit(unit_chr))?;
        let number = period_str[..period_str.len() - unit_chr.len_utf8()].parse::<i32>()?;
        Ok(Period::new(number, unit))
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn unit(&self) -> DateUnit {
        self.unit
    }

    /// Shifts `d` by this period, or `None` when the result leaves chrono's
    /// representable range.
    ///
    /// Month and year shifts keep the day of month, clamped to the last day
    /// of the target month: 2024-01-31 + 1M is 2024-02-29.
    pub fn checked_add_to_date(&self, d: NaiveDate) -> Option<NaiveDate> {
        let number = self.number() as i64;
        match self.unit() {
            DateUnit::Days => shift_days(d, number),
            DateUnit::Weeks => shift_days(d, 7 * number),
            DateUnit::Months => shift_months(d, number),
            DateUnit::Years => shift_months(d, 12 * number)
        }
    }

    /// Same as [`Period::checked_add_to_date`], keeping the time of day.
    pub fn checked_add_to_datetime(&self, dt: NaiveDateTime) -> Option<NaiveDateTime> {
        self.checked_add_to_date(dt.date())
            .map(|d| d.and_time(dt.time()))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.number(), self.unit().to_char())
    }
}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::parse(s)
    }
}

impl std::ops::Neg for Period {
    type Output = Period;

    fn neg(self) -> Period {
        Period::new(-self.number, self.unit)
    }
}

fn shift_days(horizon: NaiveDate, number: i64) -> Option<NaiveDate> {
    if number >= 0 {
        horizon.checked_add_days(Days::new(number as u64))
    } else {
        horizon.checked_sub_days(Days::new(number.unsigned_abs()))
    }
}

fn shift_months(horizon: NaiveDate, number: i64) -> Option<NaiveDate> {
    let total = horizon.month0() as i64 + number;
    let new_year = i32::try_from(horizon.year() as i64 + total.div_euclid(12)).ok()?;
    let new_month = total.rem_euclid(12) as u32 + 1;
    let last = days_of_month(new_year, new_month);
    NaiveDate::from_ymd_opt(new_year, new_month, last.min(horizon.day()))
}

/// # Panics
///
/// Panics if the resulting date is out of range, like chrono's own
/// `NaiveDate + TimeDelta`. Use [`Period::checked_add_to_date`] otherwise.
impl Add<Period> for NaiveDate {
    type Output = Self;

    fn add(self, period: Period) -> Self {
        period.checked_add_to_date(self)
            .expect("`NaiveDate + Period` overflowed")
    }
}

impl Sub<Period> for NaiveDate {
    type Output = Self;

    fn sub(self, period: Period) -> Self {
        self + (-period)
    }
}

impl Add<Period> for NaiveDateTime {
    type Output = Self;

    fn add(self, period: Period) -> Self {
        period.checked_add_to_datetime(self)
            .expect("`NaiveDateTime + Period` overflowed")
    }
}

impl Sub<Period> for NaiveDateTime {
    type Output = Self;

    fn sub(self, period: Period) -> Self {
        self + (-period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(Period::parse("10Y").unwrap(), Period::years(10));
        assert_eq!(Period::parse("2w").unwrap(), Period::weeks(2));
        assert_eq!(Period::parse("-5D").unwrap(), Period::days(-5));
        assert_eq!("3M".parse::<Period>().unwrap(), Period::months(3));

        let tenor = Period::parse("-18M").unwrap();
        assert_eq!((tenor.number(), tenor.unit()), (-18, DateUnit::Months));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Period::parse(""), Err(ParsePeriodError::Empty));
        assert_eq!(Period::parse("3Q"), Err(ParsePeriodError::UnknownTimeUnit('Q')));
        assert!(matches!(Period::parse("xM"), Err(ParsePeriodError::Parse(_))));
        assert!(matches!(Period::parse("M"), Err(ParsePeriodError::Parse(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::months(3).to_string(), "3M");
        assert_eq!(Period::days(-1).to_string(), "-1D");
    }

    #[test]
    fn test_add_days_and_weeks() {
        assert_eq!(ymd(2024, 1, 1) + Period::days(5), ymd(2024, 1, 6));
        assert_eq!(ymd(2024, 1, 1) + Period::weeks(2), ymd(2024, 1, 15));
        assert_eq!(ymd(2024, 1, 15) - Period::days(5), ymd(2024, 1, 10));
        assert_eq!(ymd(2024, 12, 30) + Period::days(3), ymd(2025, 1, 2));
    }

    #[test]
    fn test_month_end_clamps() {
        assert_eq!(ymd(2024, 1, 31) + Period::months(1), ymd(2024, 2, 29));
        assert_eq!(ymd(2023, 1, 31) + Period::months(1), ymd(2023, 2, 28));
        assert_eq!(ymd(2024, 2, 29) + Period::years(1), ymd(2025, 2, 28));
        assert_eq!(ymd(2024, 3, 31) - Period::months(1), ymd(2024, 2, 29));
    }

    #[test]
    fn test_month_shift_crosses_years() {
        assert_eq!(ymd(2024, 11, 15) + Period::months(3), ymd(2025, 2, 15));
        assert_eq!(ymd(2024, 2, 15) - Period::months(14), ymd(2022, 12, 15));
    }

    #[test]
    fn test_datetime_keeps_time_of_day() {
        let dt = ymd(2024, 1, 31).and_hms_opt(13, 45, 0).unwrap();
        assert_eq!(dt + Period::months(1), ymd(2024, 2, 29).and_hms_opt(13, 45, 0).unwrap());
    }

    #[test]
    fn test_checked_overflow() {
        assert_eq!(Period::years(i32::MAX).checked_add_to_date(ymd(2024, 1, 1)), None);
        assert_eq!(Period::days(i32::MIN).checked_add_to_date(ymd(2024, 1, 1)), None);
    }
}
