// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! UNIX timestamp and broken-down local date-time reads, built on `chrono` —
//! the same crate the teacher depends on for its own time handling.

use chrono::{Datelike, Local, TimeZone, Timelike};
use std::time::{SystemTime, UNIX_EPOCH};

fn since_epoch() -> std::time::Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is before the UNIX epoch")
}

#[must_use]
pub fn now_unix_secs() -> i64 {
    since_epoch().as_secs() as i64
}

#[must_use]
pub fn now_unix_millis() -> i64 {
    since_epoch().as_millis() as i64
}

#[must_use]
pub fn now_unix_micros() -> i64 {
    since_epoch().as_micros() as i64
}

#[must_use]
pub fn now_unix_nanos() -> i64 {
    since_epoch().as_nanos() as i64
}

/// A broken-down local date-time, matching the fields the spec's
/// `moment.h`-equivalent exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalDateTimeParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// `0` = Monday … `6` = Sunday, matching `chrono::Weekday::num_days_from_monday`.
    pub weekday: u32,
    /// Day of the year, `1`-based.
    pub yearday: u32,
    pub is_dst: bool,
}

/// Reads the current local date and time, broken down into its components.
#[must_use]
pub fn local_datetime_parts() -> LocalDateTimeParts {
    let now = Local::now();
    LocalDateTimeParts {
        year: now.year(),
        month: now.month(),
        day: now.day(),
        hour: now.hour(),
        minute: now.minute(),
        second: now.second(),
        weekday: now.weekday().num_days_from_monday(),
        yearday: now.ordinal(),
        // `chrono::Local` resolves DST through the platform's `tz` database;
        // the fixed offset alone can't tell standard time from daylight time,
        // so this compares the current offset to January's (never in DST in
        // either hemisphere's common conventions is an oversimplification —
        // see DESIGN.md Open Question #4 for the accepted limitation).
        is_dst: is_probably_dst(now),
    }
}

fn is_probably_dst(now: chrono::DateTime<Local>) -> bool {
    use chrono::Offset;
    let january = Local
        .with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
        .single();
    match january {
        Some(january) => now.offset().fix() != january.offset().fix(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_timestamps_are_monotonically_non_decreasing_and_consistent() {
        let secs = now_unix_secs();
        let millis = now_unix_millis();
        assert!(secs > 0);
        assert!(millis >= secs * 1000);
    }

    #[test]
    fn local_datetime_parts_are_in_range() {
        let parts = local_datetime_parts();
        assert!((1..=12).contains(&parts.month));
        assert!((1..=31).contains(&parts.day));
        assert!(parts.hour < 24);
        assert!(parts.minute < 60);
        assert!(parts.second < 60);
        assert!(parts.weekday < 7);
        assert!((1..=366).contains(&parts.yearday));
    }
}
