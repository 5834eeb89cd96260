//! Derived values for logged workout sessions.
//!
//! Durations are never stored; they are recomputed from the session's start
//! and end times whenever a log is turned into a response.

use chrono::{Datelike, Duration, NaiveDate};

use crate::types::Timestamp;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Whole minutes between `start` and `end`, rounded down.
///
/// Returns `None` while the session has no end time.
pub fn duration_minutes(start: Timestamp, end: Option<Timestamp>) -> Option<i64> {
    end.map(|end| {
        (end - start)
            .num_milliseconds()
            .div_euclid(MILLIS_PER_MINUTE)
    })
}

/// First day (Sunday) of the calendar week containing `at`.
pub fn week_start(at: Timestamp) -> NaiveDate {
    let date = at.date_naive();
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// True when `at` falls in the same Sunday-based calendar week as `now`.
pub fn in_same_week(at: Timestamp, now: Timestamp) -> bool {
    week_start(at) == week_start(now)
}

/// True when `at` falls in the same calendar month as `now`.
pub fn in_same_month(at: Timestamp, now: Timestamp) -> bool {
    at.year() == now.year() && at.month() == now.month()
}
