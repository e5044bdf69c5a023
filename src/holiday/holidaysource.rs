use std::sync::Arc;

use async_trait::async_trait;

use crate::holiday::holidayset::HolidaySet;

/// Asynchronous provider of the holidays observed in a given year.
///
/// Implementations stand at the boundary where a real backend (an HTTP
/// holiday API, a database) would be queried; callers only depend on this
/// trait.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn fetch_holidays(&self, year: i32) -> HolidaySet;
}

#[async_trait]
impl<T: HolidaySource + ?Sized> HolidaySource for Arc<T> {
    async fn fetch_holidays(&self, year: i32) -> HolidaySet {
        (**self).fetch_holidays(year).await
    }
}
