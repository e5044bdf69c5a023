use chrono::{
    Datelike,
    NaiveDateTime
};

use crate::holiday::holidayset::HolidaySet;
use crate::holiday::holidaysource::HolidaySource;

pub async fn get_holidays<S>(source: &S, year: i32) -> HolidaySet
where
    S: HolidaySource + ?Sized
{
    source.fetch_holidays(year).await
}

/// Fetches the holidays of `date`'s year and checks for a same-day entry.
pub async fn is_holiday<S>(source: &S, date: NaiveDateTime) -> bool
where
    S: HolidaySource + ?Sized
{
    let holiday_set = get_holidays(source, date.year()).await;
    holiday_set.contains(date.date())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;
    use crate::holiday::holidayset::Holiday;
    use crate::holiday::simulatedholidaysource::SimulatedHolidaySource;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    struct CountingSource {
        calls: AtomicUsize
    }

    #[async_trait]
    impl HolidaySource for CountingSource {
        async fn fetch_holidays(&self, year: i32) -> HolidaySet {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let d = NaiveDate::from_ymd_opt(year, 7, 4).unwrap();
            HolidaySet::new(year, vec![Holiday::new("Independence Day", d)])
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_holiday_with_simulated_source() {
        let source = SimulatedHolidaySource::default();
        assert!(is_holiday(&source, at(2024, 1, 1, 0)).await);
        assert!(is_holiday(&source, at(2024, 12, 25, 0)).await);
        assert!(!is_holiday(&source, at(2004, 3, 4, 0)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_holiday_ignores_time_of_day() {
        let source = SimulatedHolidaySource::default();
        assert!(is_holiday(&source, at(2030, 12, 31, 23)).await);
    }

    #[tokio::test]
    async fn test_custom_source_is_queried_every_call() {
        let source = Arc::new(CountingSource { calls: AtomicUsize::new(0) });
        assert!(is_holiday(&source, at(2024, 7, 4, 9)).await);
        assert!(!is_holiday(&source, at(2024, 1, 1, 0)).await);
        assert_eq!(get_holidays(&source, 1990).await.year(), 1990);
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_works_through_trait_objects() {
        let source: Arc<dyn HolidaySource> = Arc::new(SimulatedHolidaySource::new(std::time::Duration::ZERO));
        assert_eq!(get_holidays(source.as_ref(), 2025).await.len(), 3);
    }
}
