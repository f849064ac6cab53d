//! Import command for batch-appending delimited lines.

use std::io::{Read, Write};

use anyhow::{Context, Result};

use daylog_core::parse_log_lines;
use daylog_store::SnapshotStore;

/// Parses delimited log lines from `input` and appends them in order.
///
/// The whole batch is validated before anything is appended, so a bad
/// line leaves the log untouched.
pub fn run<R: Read, W: Write>(writer: &mut W, store: &SnapshotStore, mut input: R) -> Result<()> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("failed to read import input")?;

    let entries = parse_log_lines(&text)?;
    let count = entries.len();

    let mut log = store.load().context("failed to load log")?;
    for entry in entries {
        log = log.append(entry)?;
    }
    store.save(&log).context("failed to save log")?;

    writeln!(writer, "Imported {count} entries ({} total)", log.len())?;
    Ok(())
}
