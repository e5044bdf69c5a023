use chrono::{
    Datelike,
    Local,
    NaiveDateTime
};

/// Source of the current moment.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: NaiveDateTime
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> FixedClock {
        FixedClock { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}

pub fn current_year(clock: &dyn Clock) -> i32 {
    clock.now().year()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_fixed_clock_year() {
        let clock = FixedClock::new(
            NaiveDate::from_ymd_opt(1999, 12, 31).unwrap().and_hms_opt(23, 59, 59).unwrap()
        );
        assert_eq!(current_year(&clock), 1999);
    }

    #[test]
    fn test_system_clock_matches_local_year() {
        let expected = Local::now().year();
        let year = current_year(&SystemClock);
        // tolerate a new year ticking over between the two reads
        assert!(year == expected || year == expected + 1);
    }
}
