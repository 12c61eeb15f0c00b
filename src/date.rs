//! Target-day selection.
//!
//! The relay always snapshots the day *before* the invocation, so a run
//! scheduled shortly after midnight captures a complete day.

use chrono::{DateTime, Duration, Local};

/// The calendar date one day before now, as `YYYY-MM-DD` in local time.
pub fn yesterday() -> String {
    day_before(Local::now())
}

/// The calendar date one day before `now`, as `YYYY-MM-DD`.
pub fn day_before(now: DateTime<Local>) -> String {
    (now - Duration::days(1)).format("%Y-%m-%d").to_string()
}
