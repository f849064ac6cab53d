//! Compact time-of-day notation.
//!
//! Times are written as a run of digits with the minutes in the last two
//! positions and the hours in whatever precedes them: `"930"` is 9:30,
//! `"2359"` is 23:59, `"5"` is 0:05. The literal `"2400"` marks the end of
//! the day; it is a valid token but is exempt from normal reformatting.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The implicit start of the first interval of a day.
pub const DAY_START: &str = "0000";

/// The end-of-day sentinel, 24:00.
pub const DAY_END: &str = "2400";

/// Errors produced when a compact time token fails to parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The minutes field (last two characters) was missing, non-numeric,
    /// or greater than 59.
    #[error("invalid minutes in time {token:?}")]
    InvalidMinutes { token: String },

    /// The hours field was non-numeric, greater than 24, or 24 with a
    /// nonzero minutes field.
    #[error("invalid hours in time {token:?}")]
    InvalidHours { token: String },
}

/// A validated time of day.
///
/// `hours` is in `[0, 24]` and `minutes` in `[0, 59]`, with 24 hours only
/// ever paired with 0 minutes. 24:00 parses (it is the end-of-day
/// sentinel's value) but duration arithmetic special-cases the sentinel
/// token itself, so most callers never see it decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
}

impl TimeOfDay {
    /// Parses a compact time token.
    ///
    /// The last two characters are the minutes, the rest the hours; an
    /// empty hours prefix means hour zero, so a one-character token is a
    /// bare minutes digit (`"5"` is 0:05).
    pub fn parse(token: &str) -> Result<Self, TimeError> {
        let invalid_minutes = || TimeError::InvalidMinutes {
            token: token.to_string(),
        };
        let invalid_hours = || TimeError::InvalidHours {
            token: token.to_string(),
        };

        let split = token.len().saturating_sub(2);
        if !token.is_char_boundary(split) {
            return Err(invalid_minutes());
        }
        let (hour_str, minute_str) = token.split_at(split);

        if minute_str.is_empty() {
            return Err(invalid_minutes());
        }
        let minutes: u8 = minute_str.parse().map_err(|_| invalid_minutes())?;
        let hours: u8 = if hour_str.is_empty() {
            0
        } else {
            hour_str.parse().map_err(|_| invalid_hours())?
        };

        if minutes > 59 {
            return Err(invalid_minutes());
        }
        if hours > 24 || (hours == 24 && minutes > 0) {
            return Err(invalid_hours());
        }

        Ok(Self { hours, minutes })
    }

    /// Creates a time of day from already-validated fields.
    ///
    /// Returns `InvalidHours`/`InvalidMinutes` under the same rules as
    /// [`TimeOfDay::parse`].
    pub fn new(hours: u8, minutes: u8) -> Result<Self, TimeError> {
        let token = format!("{hours:02}{minutes:02}");
        if minutes > 59 {
            return Err(TimeError::InvalidMinutes { token });
        }
        if hours > 24 || (hours == 24 && minutes > 0) {
            return Err(TimeError::InvalidHours { token });
        }
        Ok(Self { hours, minutes })
    }

    /// The hours component, `[0, 24]`.
    #[must_use]
    pub const fn hours(self) -> u8 {
        self.hours
    }

    /// The minutes component, `[0, 59]`.
    #[must_use]
    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    /// Minutes elapsed since midnight.
    #[must_use]
    pub const fn minutes_since_midnight(self) -> i64 {
        self.hours as i64 * 60 + self.minutes as i64
    }

    /// Renders the canonical compact token.
    ///
    /// The value `hours*100 + minutes` in plain decimal, which is the
    /// zero-padded `HHMM` form with its leading-zero run stripped (the
    /// all-zero case collapses to `"0"`): 0:05 is `"5"`, 9:00 is `"900"`,
    /// 0:00 is `"0"`.
    #[must_use]
    pub fn to_token(self) -> String {
        (u32::from(self.hours) * 100 + u32::from(self.minutes)).to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_token())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Re-renders a token in canonical form.
///
/// The end-of-day sentinel passes through unchanged; anything else is
/// parsed and formatted, propagating parse errors.
pub fn reformat(token: &str) -> Result<String, TimeError> {
    if token == DAY_END {
        return Ok(token.to_string());
    }
    Ok(TimeOfDay::parse(token)?.to_token())
}
