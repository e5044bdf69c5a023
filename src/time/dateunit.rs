use std::fmt;
use std::str::FromStr;

use serde::{
    Serialize,
    Deserialize
};
use thiserror::Error;

/// Granularity of an additive date shift.
///
/// The lowercase string form (`"days"`, `"weeks"`, ...) is what configuration
/// files and callers passing units as text use.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateUnit {
    #[default]
    Days,
    Weeks,
    Months,
    Years
}

impl DateUnit {
    pub const ALL: [DateUnit; 4] = [
        DateUnit::Days,
        DateUnit::Weeks,
        DateUnit::Months,
        DateUnit::Years
    ];

    /// Single-letter tenor code used by `Period` ("5D", "3M", ...).
    pub fn to_char(&self) -> char {
        match self {
            DateUnit::Days => 'D',
            DateUnit::Weeks => 'W',
            DateUnit::Months => 'M',
            DateUnit::Years => 'Y'
        }
    }

    pub fn from_char(c: char) -> Option<DateUnit> {
        match c.to_ascii_uppercase() {
            'D' => Some(DateUnit::Days),
            'W' => Some(DateUnit::Weeks),
            'M' => Some(DateUnit::Months),
            'Y' => Some(DateUnit::Years),
            _ => None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateUnit::Days => "days",
            DateUnit::Weeks => "weeks",
            DateUnit::Months => "months",
            DateUnit::Years => "years"
        }
    }

    /// Days and weeks move the instant by whole days; months and years move
    /// the calendar month.
    pub fn is_month_based(&self) -> bool {
        matches!(self, DateUnit::Months | DateUnit::Years)
    }
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown date unit '{0}'")]
pub struct ParseDateUnitError(pub String);

impl FromStr for DateUnit {
    type Err = ParseDateUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        DateUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == normalized)
            .ok_or_else(|| ParseDateUnitError(s.to_owned()))
    }
}
