//! The date utility surface: a [`DateUtils`] facade over an injectable clock
//! and holiday source, and free functions bound to the default collaborators
//! (the local wall clock and the simulated holiday source).

use chrono::{
    Datelike,
    NaiveDateTime
};
use futures::stream::{self, StreamExt};
use tracing::debug;

use crate::configuration::Configuration;
use crate::holiday::holidaylookup;
use crate::holiday::holidayset::{Holiday, HolidaySet};
use crate::holiday::holidaysource::HolidaySource;
use crate::holiday::simulatedholidaysource::SimulatedHolidaySource;
use crate::time::arithmetic;
use crate::time::clock::{self, Clock, SystemClock};
use crate::time::comparison;
use crate::time::dateerror::DateError;
use crate::time::dateunit::DateUnit;
use crate::time::instant::{AsAmount, AsInstant};
use crate::time::rangeofdates::RangeOfDates;

pub use crate::time::arithmetic::{add, add_days};
pub use crate::time::comparison::{is_date_before, is_same_day, is_within_range};

pub const MAX_CONCURRENT_HOLIDAY_FETCHES: usize = 16;

pub struct DateUtils<C = SystemClock, S = SimulatedHolidaySource> {
    clock: C,
    holiday_source: S,
    default_unit: DateUnit
}

impl DateUtils {
    pub fn new() -> DateUtils {
        DateUtils::with_parts(SystemClock, SimulatedHolidaySource::default())
    }

    pub fn from_configuration(config: &Configuration) -> DateUtils {
        DateUtils::with_parts(SystemClock, SimulatedHolidaySource::new(config.holiday_delay()))
            .with_default_unit(config.default_unit)
    }
}

impl Default for DateUtils {
    fn default() -> Self {
        DateUtils::new()
    }
}

impl<C, S> DateUtils<C, S>
where
    C: Clock,
    S: HolidaySource
{
    pub fn with_parts(clock: C, holiday_source: S) -> DateUtils<C, S> {
        DateUtils { clock, holiday_source, default_unit: DateUnit::default() }
    }

    pub fn with_default_unit(mut self, unit: DateUnit) -> Self {
        self.default_unit = unit;
        self
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn holiday_source(&self) -> &S {
        &self.holiday_source
    }

    pub fn default_unit(&self) -> DateUnit {
        self.default_unit
    }

    pub fn get_current_year(&self) -> i32 {
        clock::current_year(&self.clock)
    }

    pub fn add<D, A>(&self, date: D, amount: A, unit: DateUnit) -> Result<NaiveDateTime, DateError>
    where
        D: AsInstant,
        A: AsAmount
    {
        arithmetic::add(date, amount, unit)
    }

    /// `add` in this facade's default unit.
    pub fn add_default<D, A>(&self, date: D, amount: A) -> Result<NaiveDateTime, DateError>
    where
        D: AsInstant,
        A: AsAmount
    {
        arithmetic::add(date, amount, self.default_unit)
    }

    pub fn is_within_range(&self,
                           date: NaiveDateTime,
                           from: NaiveDateTime,
                           to: NaiveDateTime) -> Result<bool, DateError> {
        comparison::is_within_range(date, from, to)
    }

    pub fn is_date_before(&self, date: NaiveDateTime, compare_date: NaiveDateTime) -> bool {
        comparison::is_date_before(date, compare_date)
    }

    pub fn is_same_day(&self, date: NaiveDateTime, compare_date: NaiveDateTime) -> bool {
        comparison::is_same_day(date, compare_date)
    }

    pub async fn get_holidays(&self, year: i32) -> HolidaySet {
        holidaylookup::get_holidays(&self.holiday_source, year).await
    }

    pub async fn is_holiday(&self, date: NaiveDateTime) -> bool {
        holidaylookup::is_holiday(&self.holiday_source, date).await
    }

    /// Holidays of the current year according to this facade's clock.
    pub async fn get_current_year_holidays(&self) -> HolidaySet {
        self.get_holidays(self.get_current_year()).await
    }

    /// Holidays whose day lies in `[from, to]`, in date order.
    ///
    /// One holiday set is fetched per year spanned, at most
    /// [`MAX_CONCURRENT_HOLIDAY_FETCHES`] at a time, so the cost grows with
    /// the number of years in the range.
    pub async fn holidays_between(&self,
                                  from: NaiveDateTime,
                                  to: NaiveDateTime) -> Result<Vec<Holiday>, DateError> {
        let range = RangeOfDates::new(from, to)?;
        let (first_day, last_day) = (range.start().date(), range.end().date());
        let holiday_sets: Vec<HolidaySet> = stream::iter(first_day.year()..=last_day.year())
            .map(|year| self.get_holidays(year))
            .buffered(MAX_CONCURRENT_HOLIDAY_FETCHES)
            .collect()
            .await;
        let mut holidays: Vec<Holiday> = holiday_sets
            .iter()
            .flat_map(HolidaySet::iter)
            .filter(|h| (first_day..=last_day).contains(&h.date()))
            .cloned()
            .collect();
        holidays.sort_by_key(Holiday::date);
        debug!(%from, %to, count = holidays.len(), "collected holidays in range");
        Ok(holidays)
    }
}

pub fn get_current_year() -> i32 {
    clock::current_year(&SystemClock)
}

/// Holidays for `year` from the default simulated source.
pub async fn get_holidays(year: i32) -> HolidaySet {
    holidaylookup::get_holidays(&SimulatedHolidaySource::default(), year).await
}

pub async fn is_holiday(date: NaiveDateTime) -> bool {
    holidaylookup::is_holiday(&SimulatedHolidaySource::default(), date).await
}
