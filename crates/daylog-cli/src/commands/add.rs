//! Add command for appending one entry to the log.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use daylog_core::{LogEntry, effective_start_time, format_clock, minutes_between, reformat};
use daylog_store::SnapshotStore;

/// Appends an entry and saves the snapshot, reporting the derived
/// interval.
pub fn run<W: Write>(
    writer: &mut W,
    store: &SnapshotStore,
    end_time: &str,
    activity: &str,
    comment: Option<String>,
    date: Option<NaiveDate>,
) -> Result<()> {
    let log = store.load().context("failed to load log")?;

    let entry = LogEntry {
        end_time: end_time.to_string(),
        activity_label: activity.to_string(),
        comment,
        date,
    };
    let start = effective_start_time(log.entries(), log.len()).to_string();
    let log = log.append(entry)?;
    store.save(&log).context("failed to save log")?;

    let minutes = minutes_between(&start, end_time)?;
    writeln!(
        writer,
        "Logged {} from {} to {} ({})",
        log.entries().last().map_or(activity, |e| e.activity_label.as_str()),
        reformat(&start)?,
        reformat(end_time)?,
        format_clock(minutes)
    )?;
    if minutes < 0 {
        writeln!(
            writer,
            "Note: entry ends before the previous one; duration is negative."
        )?;
    }

    Ok(())
}
