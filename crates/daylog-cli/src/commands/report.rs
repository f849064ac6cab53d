//! Report command for the per-activity summary.

use std::io::Write;

use anyhow::{Context, Result};

use daylog_core::{format_clock, format_units, summarize};
use daylog_store::SnapshotStore;

/// Prints total time per activity, sorted by label, plus the grand
/// total.
pub fn run<W: Write>(writer: &mut W, store: &SnapshotStore, json: bool, units: bool) -> Result<()> {
    let log = store.load().context("failed to load log")?;
    let summary = summarize(log.entries()).context("log contains an invalid end time")?;

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }

    if summary.rows.is_empty() {
        writeln!(writer, "No entries logged.")?;
        return Ok(());
    }

    let render = |minutes: i64| {
        if units {
            format_units(minutes)
        } else {
            format_clock(minutes)
        }
    };

    for row in &summary.rows {
        writeln!(
            writer,
            "{:<24} {:>8}",
            row.activity_label,
            render(row.total_minutes)
        )?;
    }
    writeln!(writer, "{:<24} {:>8}", "TOTAL", render(summary.total_minutes))?;

    Ok(())
}
