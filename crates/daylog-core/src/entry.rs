//! Log entry data model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One completed activity interval, recorded by its end time.
///
/// The interval's start is implicit: it is the end time of the preceding
/// entry in the log, or `"0000"` for the first entry. Field names
/// round-trip the persisted snapshot shape exactly (`endTime`,
/// `activityLabel`, `comment`, `date`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// When the interval ends, as a compact time token.
    pub end_time: String,

    /// Free-text activity identifier. Compared case-sensitively after
    /// trimming surrounding whitespace; the log trims it on append.
    pub activity_label: String,

    /// Optional annotation, ignored by aggregation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Optional calendar-day stamp. Used by external callers to detect
    /// day rollover; the engine itself is day-agnostic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl LogEntry {
    /// Creates an entry with no comment or date.
    pub fn new(end_time: impl Into<String>, activity_label: impl Into<String>) -> Self {
        Self {
            end_time: end_time.into(),
            activity_label: activity_label.into(),
            comment: None,
            date: None,
        }
    }

    /// The activity label with surrounding whitespace removed, as used
    /// for grouping.
    #[must_use]
    pub fn trimmed_label(&self) -> &str {
        self.activity_label.trim()
    }
}
