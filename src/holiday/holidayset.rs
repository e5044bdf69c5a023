use chrono::{
    Datelike,
    NaiveDate
};
use serde::{
    Serialize,
    Deserialize
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    name: String,
    date: NaiveDate
}

impl Holiday {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Holiday {
        Holiday { name: name.into(), date }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Holidays of one year, in the order the source reported them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySet {
    year: i32,
    holidays: Vec<Holiday>
}

impl HolidaySet {
    /// Entries falling outside `year` are dropped so every date in the set
    /// has `date.year() == year`.
    pub fn new(year: i32, holidays: Vec<Holiday>) -> HolidaySet {
        let holidays = holidays
            .into_iter()
            .filter(|h| h.date.year() == year)
            .collect();
        HolidaySet { year, holidays }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.holidays().iter().map(Holiday::date).collect()
    }

    pub fn len(&self) -> usize {
        self.holidays().len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays().is_empty()
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.holidays().iter().any(|h| h.date == d)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Holiday> {
        self.holidays().iter()
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a Holiday;
    type IntoIter = std::slice::Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
