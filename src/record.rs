use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

pub type CarCount = u64;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// One half-hour observation, timestamped at the start of the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub timestamp: NaiveDateTime,
    pub count: CarCount,
}

impl Record {
    pub fn new(timestamp: NaiveDateTime, count: CarCount) -> Self {
        Record { timestamp, count }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.timestamp.format(TIMESTAMP_FORMAT), self.count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub count: CarCount,
}

impl fmt::Display for DailyTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format("%Y-%m-%d"), self.count)
    }
}
