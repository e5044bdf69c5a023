pub mod configuration;

pub mod dateutils;

pub mod holiday {
    pub mod holidayset;
    pub mod holidaysource;
    pub mod simulatedholidaysource;
    pub mod holidaylookup;
}

pub mod logging;

pub mod time {
    pub mod utility;
    pub mod dateunit;
    pub mod dateerror;
    pub mod period;
    pub mod instant;
    pub mod clock;
    pub mod arithmetic;
    pub mod rangeofdates;
    pub mod comparison;
}
