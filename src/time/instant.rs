//! Conversion of caller-supplied values into calendar instants and amounts.
//!
//! Validating operations such as [`crate::time::arithmetic::add`] accept any
//! [`AsInstant`] / [`AsAmount`] value, so absent or malformed input reaches
//! them as `None` and is reported as a [`crate::time::dateerror::DateError`]
//! rather than being rejected at the call site.

use chrono::{
    NaiveDate,
    NaiveDateTime
};

const DATETIME_FORMATS: [&str; 2] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f"
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff]` or
/// `YYYY-MM-DD HH:MM:SS[.fff]`. Dates without a time are taken at midnight.
pub fn parse_instant(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// A value that may denote a calendar instant.
pub trait AsInstant {
    fn as_instant(&self) -> Option<NaiveDateTime>;
}

impl AsInstant for NaiveDateTime {
    fn as_instant(&self) -> Option<NaiveDateTime> {
        Some(*self)
    }
}

impl AsInstant for NaiveDate {
    fn as_instant(&self) -> Option<NaiveDateTime> {
        self.and_hms_opt(0, 0, 0)
    }
}

impl AsInstant for str {
    fn as_instant(&self) -> Option<NaiveDateTime> {
        parse_instant(self)
    }
}

impl AsInstant for String {
    fn as_instant(&self) -> Option<NaiveDateTime> {
        parse_instant(self)
    }
}

impl<T: AsInstant + ?Sized> AsInstant for &T {
    fn as_instant(&self) -> Option<NaiveDateTime> {
        (**self).as_instant()
    }
}

impl<T: AsInstant> AsInstant for Option<T> {
    fn as_instant(&self) -> Option<NaiveDateTime> {
        self.as_ref().and_then(AsInstant::as_instant)
    }
}

/// A value that may denote a finite numeric amount.
pub trait AsAmount {
    fn as_amount(&self) -> Option<f64>;
}

impl AsAmount for f64 {
    fn as_amount(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
}

impl AsAmount for f32 {
    fn as_amount(&self) -> Option<f64> {
        (*self as f64).as_amount()
    }
}

impl AsAmount for i32 {
    fn as_amount(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl AsAmount for i64 {
    fn as_amount(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl<T: AsAmount> AsAmount for Option<T> {
    fn as_amount(&self) -> Option<f64> {
        self.as_ref().and_then(AsAmount::as_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_instant_formats() {
        assert_eq!(parse_instant("2024-01-05"), Some(midnight(2024, 1, 5)));
        assert_eq!(
            parse_instant("2024-01-05T10:30:00"),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(10, 30, 0)
        );
        assert_eq!(
            parse_instant("2024-01-05 10:30:00.250"),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_milli_opt(10, 30, 0, 250)
        );
    }

    #[test]
    fn test_parse_instant_rejects_garbage() {
        assert_eq!(parse_instant("not a date"), None);
        assert_eq!(parse_instant("2023-02-30"), None);
        assert_eq!(parse_instant(""), None);
    }

    #[test]
    fn test_option_instant() {
        let none: Option<NaiveDate> = None;
        assert_eq!(none.as_instant(), None);
        assert_eq!(Some("2024-01-01").as_instant(), Some(midnight(2024, 1, 1)));
    }

    #[test]
    fn test_amounts() {
        assert_eq!(5i32.as_amount(), Some(5.0));
        assert_eq!(7i64.as_amount(), Some(7.0));
        assert_eq!(2.5f64.as_amount(), Some(2.5));
        assert_eq!(f64::NAN.as_amount(), None);
        assert_eq!(f64::INFINITY.as_amount(), None);
        assert_eq!(None::<i32>.as_amount(), None);
    }
}
