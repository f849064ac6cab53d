//! The ordered activity log and its derived views.
//!
//! Insertion order is the only ordering; no timestamp-based re-sorting
//! happens anywhere. Start times are never stored: each entry's start is
//! derived from its predecessor's end, keeping the sequence of end times
//! the single source of truth.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::{DAY_START, TimeError, TimeOfDay, reformat};
use crate::duration::minutes_between;
use crate::entry::LogEntry;

/// Errors rejecting an entry at the append boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The end time token did not parse.
    #[error(transparent)]
    Time(#[from] TimeError),
}

/// The implicit start time of the entry at `index`.
///
/// `"0000"` for the first entry, otherwise the previous entry's end time.
#[must_use]
pub fn effective_start_time(entries: &[LogEntry], index: usize) -> &str {
    match index.checked_sub(1).and_then(|prev| entries.get(prev)) {
        Some(previous) => &previous.end_time,
        None => DAY_START,
    }
}

/// Whether [`ActivityLog::append`] would accept the entry.
///
/// The predicate form of append validation, for callers that gate a
/// commit rather than handle the typed error.
#[must_use]
pub fn can_append(entry: &LogEntry) -> bool {
    validate(entry).is_ok()
}

pub(crate) fn validate(entry: &LogEntry) -> Result<(), ValidationError> {
    if entry.end_time.is_empty() {
        return Err(ValidationError::Empty { field: "end time" });
    }
    if entry.activity_label.trim().is_empty() {
        return Err(ValidationError::Empty {
            field: "activity label",
        });
    }
    TimeOfDay::parse(&entry.end_time)?;
    Ok(())
}

/// One enriched display row: the stored entry plus its derived interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRow {
    /// Derived start, reformatted to canonical form.
    pub start_time: String,
    /// Stored end, reformatted to canonical form.
    pub end_time: String,
    pub activity_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Elapsed minutes; negative when the entry ends before its
    /// predecessor.
    pub minutes: i64,
}

/// An append-only sequence of log entries.
///
/// Mutating operations return a new log and leave `self` untouched, so
/// callers holding an earlier view are never invalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Wraps an already-ordered entry sequence, e.g. a loaded snapshot.
    ///
    /// Entries are taken as-is; any invalid token surfaces later as a
    /// `TimeError` from [`ActivityLog::rows`] or
    /// [`crate::summarize`].
    #[must_use]
    pub const fn from_entries(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }

    /// The stored entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a new log with `entry` appended, its label trimmed.
    ///
    /// Rejects entries with an empty end time, an all-whitespace label,
    /// or an end time that does not parse; `self` is unchanged either
    /// way.
    pub fn append(&self, entry: LogEntry) -> Result<Self, ValidationError> {
        validate(&entry)?;
        let entry = LogEntry {
            activity_label: entry.trimmed_label().to_string(),
            ..entry
        };
        let mut entries = self.entries.clone();
        entries.push(entry);
        Ok(Self { entries })
    }

    /// Returns the empty log. The only destructive operation.
    #[must_use]
    pub const fn clear(&self) -> Self {
        Self::new()
    }

    /// Derives the enriched row view: a scan over the end times pairing
    /// each entry with its implicit start and elapsed minutes.
    pub fn rows(&self) -> Result<Vec<LogRow>, TimeError> {
        let mut rows = Vec::with_capacity(self.entries.len());
        let mut start = DAY_START;
        for entry in &self.entries {
            let minutes = minutes_between(start, &entry.end_time)?;
            if minutes < 0 {
                tracing::debug!(
                    start,
                    end = %entry.end_time,
                    minutes,
                    "entry ends before its predecessor"
                );
            }
            rows.push(LogRow {
                start_time: reformat(start)?,
                end_time: reformat(&entry.end_time)?,
                activity_label: entry.activity_label.clone(),
                comment: entry.comment.clone(),
                minutes,
            });
            start = &entry.end_time;
        }
        Ok(rows)
    }

    /// Serializes the log as a JSON array of entries, the persisted
    /// snapshot shape.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }

    /// Deserializes a persisted snapshot.
    pub fn from_json(blob: &str) -> serde_json::Result<Self> {
        let entries = serde_json::from_str(blob)?;
        Ok(Self { entries })
    }
}
