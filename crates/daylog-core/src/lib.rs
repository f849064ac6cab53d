//! Time-log computation engine.
//!
//! A day's activity is recorded as an append-only sequence of entries, each
//! marking the *end* of an interval in compact `HMM`/`HHMM` notation. This
//! crate derives everything else from that sequence:
//! - Clock: parsing, validation and formatting of compact time tokens
//! - Duration: elapsed minutes between two tokens, display rendering
//! - Log: implicit per-entry start times, validated append, enriched rows
//! - Summary: per-activity totals, sorted by label
//!
//! All operations are pure functions of their inputs; the engine retains no
//! state across calls.

mod clock;
mod duration;
mod entry;
mod import;
mod log;
mod summary;

pub use clock::{DAY_END, DAY_START, TimeError, TimeOfDay, reformat};
pub use duration::{format_clock, format_units, minutes_between};
pub use entry::LogEntry;
pub use import::{ImportError, parse_log_lines};
pub use log::{ActivityLog, LogRow, ValidationError, can_append, effective_start_time};
pub use summary::{Summary, SummaryRow, summarize};
