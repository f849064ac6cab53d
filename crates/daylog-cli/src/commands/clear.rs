//! Clear command for wiping the log.

use std::io::Write;

use anyhow::{Context, Result};

use daylog_store::SnapshotStore;

/// Resets the log to the empty sequence.
pub fn run<W: Write>(writer: &mut W, store: &SnapshotStore) -> Result<()> {
    let log = store.load().context("failed to load log")?;
    let removed = log.len();
    store.save(&log.clear()).context("failed to save log")?;
    writeln!(writer, "Cleared {removed} entries")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use daylog_core::{ActivityLog, LogEntry};

    #[test]
    fn clear_empties_the_snapshot() {
        let temp = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(temp.path().join("log.json"));
        let log = ActivityLog::new()
            .append(LogEntry::new("0930", "email"))
            .unwrap();
        store.save(&log).unwrap();

        let mut out = Vec::new();
        run(&mut out, &store).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Cleared 1 entries\n");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn clear_on_empty_log_is_fine() {
        let temp = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(temp.path().join("log.json"));
        let mut out = Vec::new();
        run(&mut out, &store).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Cleared 0 entries\n");
    }
}
