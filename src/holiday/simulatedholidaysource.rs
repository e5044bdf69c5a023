use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::holiday::holidayset::{Holiday, HolidaySet};
use crate::holiday::holidaysource::HolidaySource;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDateHoliday {
    name: &'static str,
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub const fn new(name: &'static str, month: u32, day: u32) -> FixedDateHoliday {
        FixedDateHoliday { name, month, day }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn get_holiday(&self, year: i32) -> Option<Holiday> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .map(|d| Holiday::new(self.name(), d))
    }
}

pub const SIMULATED_HOLIDAYS: [FixedDateHoliday; 3] = [
    FixedDateHoliday::new("New Year's Day", 1, 1),
    FixedDateHoliday::new("Christmas", 12, 25),
    FixedDateHoliday::new("New Year's Eve", 12, 31)
];

/// Stand-in for a remote holiday API: waits a fixed delay, then answers
/// with [`SIMULATED_HOLIDAYS`] for the requested year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedHolidaySource {
    delay: Duration
}

impl SimulatedHolidaySource {
    pub fn new(delay: Duration) -> SimulatedHolidaySource {
        SimulatedHolidaySource { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedHolidaySource {
    fn default() -> Self {
        SimulatedHolidaySource::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl HolidaySource for SimulatedHolidaySource {
    async fn fetch_holidays(&self, year: i32) -> HolidaySet {
        debug!(year, delay_ms = self.delay.as_millis() as u64, "fetching simulated holidays");
        tokio::time::sleep(self.delay).await;

        let holidays: Vec<Holiday> = SIMULATED_HOLIDAYS
            .iter()
            .filter_map(|h| h.get_holiday(year))
            .collect();
        if holidays.len() < SIMULATED_HOLIDAYS.len() {
            warn!(year, "year is outside the representable calendar range");
        }
        HolidaySet::new(year, holidays)
    }
}
