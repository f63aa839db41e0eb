//! Calendar-day window handling.
//!
//! All day arithmetic is UTC so the same payload always keys to the same
//! report days regardless of where the formatter runs.

use chrono::{DateTime, Datelike, Duration as ChronoDuration, NaiveDate, NaiveTime};

/// One calendar day of the reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportDay(NaiveDate);

impl ReportDay {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Numeric `YYYYMMDD` key used for event-to-day lookup.
    pub fn key(&self) -> u32 {
        date_key(self.0)
    }

    /// Unix seconds at midnight UTC of this day.
    pub fn unix(&self) -> i64 {
        self.0.and_time(NaiveTime::MIN).and_utc().timestamp()
    }
}

impl From<NaiveDate> for ReportDay {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

fn date_key(date: NaiveDate) -> u32 {
    date.year() as u32 * 10_000 + date.month() * 100 + date.day()
}

/// Day key for an event timestamp, or `None` when the timestamp is outside
/// the representable range.
pub fn day_key_of(unix_seconds: i64) -> Option<u32> {
    DateTime::from_timestamp(unix_seconds, 0).map(|dt| date_key(dt.date_naive()))
}

/// Build the ascending window of `count` days ending at `end` inclusive.
pub fn window_ending(end: NaiveDate, count: usize) -> Vec<ReportDay> {
    (0..count)
        .rev()
        .map(|back| ReportDay::new(end - ChronoDuration::days(back as i64)))
        .collect()
}
