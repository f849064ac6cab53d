//! Status command for showing where the log lives and what it holds.

use std::io::Write;

use anyhow::{Context, Result};

use daylog_core::reformat;
use daylog_store::SnapshotStore;

pub fn run<W: Write>(writer: &mut W, store: &SnapshotStore) -> Result<()> {
    let log = store.load().context("failed to load log")?;

    writeln!(writer, "Day log status")?;
    writeln!(writer, "Snapshot: {}", store.path().display())?;
    writeln!(writer, "Entries:  {}", log.len())?;

    if let Some(last) = log.entries().last() {
        let end = reformat(&last.end_time).unwrap_or_else(|_| last.end_time.clone());
        writeln!(writer, "Last:     {} ({})", last.activity_label, end)?;
    }

    Ok(())
}
