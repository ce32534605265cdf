//! Calendar-day utilities shared by the journey, streak, and analytics logic.
//!
//! A "day key" is a local calendar day, represented as [`jiff::civil::Date`]
//! (which serializes and displays as `YYYY-MM-DD`). Streak logic compares day
//! keys for equality and never elapsed time; only the exam countdown uses
//! whole-day duration arithmetic.
//!
//! None of these functions read the wall clock. Callers inject the current
//! instant as a [`Zoned`] value so every computation is deterministic.

use jiff::{civil::Date, tz::TimeZone, Timestamp, ToSpan, Zoned};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Returns the day key of an instant in the given time zone.
///
/// Two instants that fall on the same local calendar day produce the same
/// key regardless of time-of-day.
pub fn day_of(ts: Timestamp, tz: &TimeZone) -> Date {
    ts.to_zoned(tz.clone()).date()
}

/// Absolute whole-day difference between two instants, rounding partial days
/// upward.
pub fn days_between(a: Timestamp, b: Timestamp) -> i64 {
    let ms = (b.as_millisecond() - a.as_millisecond()).abs();
    (ms + DAY_MS - 1) / DAY_MS
}

/// Signed count of local calendar-day boundaries from `now` to the start of
/// `day`: 0 for today, positive for future days, negative once the day has
/// passed.
pub fn days_until(now: &Zoned, day: Date) -> i64 {
    i64::from((day - now.date()).get_days())
}

/// Returns the Monday of the Monday-based week containing `date`.
///
/// A Sunday maps to the *preceding* Monday, i.e. the start of the week it
/// closes.
pub fn monday_of_week(date: Date) -> Date {
    let offset = i64::from(date.weekday().to_monday_zero_offset());
    date.saturating_sub(offset.days())
}
