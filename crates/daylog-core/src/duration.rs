//! Elapsed-minute arithmetic and display rendering.

use crate::clock::{DAY_END, TimeError, TimeOfDay};

/// Minutes in a full day; the value forced for the `"2400"` sentinel.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// One duration unit is six minutes, a tenth of an hour.
const MINUTES_PER_UNIT: i64 = 6;

/// Computes the elapsed minutes from `start` to `end`.
///
/// Either token may be the end-of-day sentinel `"2400"`, which is forced
/// to 1440 before any parsing so the contract stays total over the
/// sentinel. The result is not clamped or wrapped: an `end` earlier than
/// `start` yields a negative count, and deciding what that means is the
/// caller's business.
pub fn minutes_between(start: &str, end: &str) -> Result<i64, TimeError> {
    let start_minutes = token_minutes(start)?;
    let end_minutes = token_minutes(end)?;
    Ok(end_minutes - start_minutes)
}

fn token_minutes(token: &str) -> Result<i64, TimeError> {
    if token == DAY_END {
        return Ok(MINUTES_PER_DAY);
    }
    Ok(TimeOfDay::parse(token)?.minutes_since_midnight())
}

/// Renders a minute count for human display.
///
/// `"H:MM"` above 59 minutes, `"<n> min"` otherwise.
#[must_use]
pub fn format_clock(minutes: i64) -> String {
    if minutes > 59 {
        format!("{}:{:02}", minutes / 60, minutes % 60)
    } else {
        format!("{minutes} min")
    }
}

/// Renders a minute count as duration units (1 unit = 6 minutes).
///
/// Rounds half away from zero on the raw `minutes / 6` ratio and renders
/// the result as a plain integer, so 30 minutes is `"5"` and a full hour
/// is `"10"`.
#[must_use]
pub fn format_units(minutes: i64) -> String {
    let half = MINUTES_PER_UNIT / 2;
    let units = if minutes >= 0 {
        (minutes + half) / MINUTES_PER_UNIT
    } else {
        (minutes - half) / MINUTES_PER_UNIT
    };
    units.to_string()
}
