//! # Time Arithmetic
//!
//! Thin layer over chrono covering the handful of operations the engine
//! needs: reading "now", building an instant from a date and a time of day,
//! comparing instants, and formatting. Everything is naive local time; there
//! is a single implicit time reference and no timezone handling.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Date format used by slots and booking keys (`2025-01-25`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time-of-day format used by slots and booking keys (`10:10`)
pub const TIME_FORMAT: &str = "%H:%M";

/// Long human-readable date (`Saturday, January 25, 2025`)
pub const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Source of the current instant
///
/// The engine never reads the wall clock directly, so tests can pin "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a fixed instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

pub fn parse_time(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time, TIME_FORMAT).ok()
}

/// Combines a `YYYY-MM-DD` date and an `HH:MM` time into a local instant
pub fn slot_instant(date: &str, time: &str) -> Option<NaiveDateTime> {
    Some(parse_date(date)?.and_time(parse_time(time)?))
}

/// Minutes elapsed since midnight for a time of day
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Minutes since midnight for a time written exactly as `HH:MM`
///
/// chrono also accepts forms like `11:0` or `9:05`; those are refused here
/// so a time has a single spelling wherever it ends up in a booking key.
pub fn canonical_minute_of_day(time: &str) -> Option<u32> {
    let minutes = minute_of_day(parse_time(time)?);
    (format_minutes(minutes) == time).then_some(minutes)
}

/// Formats minutes since midnight as `HH:MM`
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Renders a date as `Saturday, January 25, 2025`, or `None` if it does not parse
pub fn format_long_date(date: &str) -> Option<String> {
    parse_date(date).map(|d| d.format(LONG_DATE_FORMAT).to_string())
}
