//! Show command for printing the enriched log table.

use std::io::Write;

use anyhow::{Context, Result};

use daylog_core::{LogRow, format_clock, format_units};
use daylog_store::SnapshotStore;

/// Prints the log with derived start times, durations and unit counts.
pub fn run<W: Write>(writer: &mut W, store: &SnapshotStore, json: bool) -> Result<()> {
    let log = store.load().context("failed to load log")?;
    let rows = log.rows().context("log contains an invalid end time")?;

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    if rows.is_empty() {
        writeln!(writer, "No entries logged.")?;
        return Ok(());
    }

    writeln!(writer, "{}", format_row("From", "To", "Activity", "Time", "Units"))?;
    for row in &rows {
        writeln!(writer, "{}", render_row(row))?;
    }

    Ok(())
}

fn format_row(from: &str, to: &str, activity: &str, time: &str, units: &str) -> String {
    format!("{from:<6} {to:<6} {activity:<24} {time:>8} {units:>6}")
}

fn render_row(row: &LogRow) -> String {
    let mut line = format_row(
        &row.start_time,
        &row.end_time,
        &row.activity_label,
        &format_clock(row.minutes),
        &format_units(row.minutes),
    );
    if let Some(comment) = &row.comment {
        line.push_str("  # ");
        line.push_str(comment);
    }
    line
}
