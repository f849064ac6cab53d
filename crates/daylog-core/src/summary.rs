//! Per-activity aggregation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::clock::{DAY_START, TimeError};
use crate::duration::minutes_between;
use crate::entry::LogEntry;

/// Total minutes for one distinct trimmed activity label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub activity_label: String,
    pub total_minutes: i64,
}

/// The aggregate view of a log: one row per distinct label plus the
/// grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Rows sorted ascending by label in code-point order.
    pub rows: Vec<SummaryRow>,
    /// Sum over all rows, equal to the sum over all entries since the
    /// grouping partitions the log.
    pub total_minutes: i64,
}

/// Groups entries by trimmed activity label and sums each group's
/// duration.
///
/// A label that trims to the empty string still forms its own group and
/// sorts first; comments never affect grouping. Errors surface the first
/// unparseable end time.
pub fn summarize(entries: &[LogEntry]) -> Result<Summary, TimeError> {
    // BTreeMap keys iterate in code-point order, which is exactly the
    // required row order.
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
    let mut start = DAY_START;
    for entry in entries {
        let minutes = minutes_between(start, &entry.end_time)?;
        *totals.entry(entry.trimmed_label()).or_insert(0) += minutes;
        start = &entry.end_time;
    }

    let rows: Vec<SummaryRow> = totals
        .into_iter()
        .map(|(activity_label, total_minutes)| SummaryRow {
            activity_label: activity_label.to_string(),
            total_minutes,
        })
        .collect();
    let total_minutes = rows.iter().map(|row| row.total_minutes).sum();

    Ok(Summary {
        rows,
        total_minutes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::effective_start_time;

    fn entry(end: &str, label: &str) -> LogEntry {
        LogEntry::new(end, label)
    }

    #[test]
    fn summarize_empty_log() {
        let summary = summarize(&[]).unwrap();
        assert!(summary.rows.is_empty());
        assert_eq!(summary.total_minutes, 0);
    }

    #[test]
    fn summarize_groups_by_trimmed_label() {
        let entries = [
            entry("0800", "A"),
            entry("0900", "A"),
            entry("1000", " B "),
        ];
        let summary = summarize(&entries).unwrap();

        assert_eq!(
            summary.rows,
            vec![
                SummaryRow {
                    activity_label: "A".to_string(),
                    total_minutes: 480 + 60,
                },
                SummaryRow {
                    activity_label: "B".to_string(),
                    total_minutes: 60,
                },
            ]
        );
        assert_eq!(summary.total_minutes, 600);
    }

    #[test]
    fn first_interval_runs_from_day_start() {
        // The first entry's interval always opens at 0000, so its full
        // length lands in that entry's group.
        let entries = [entry("0800", "A"), entry("0830", "B")];
        let summary = summarize(&entries).unwrap();
        assert_eq!(summary.rows[0].total_minutes, 480);
        assert_eq!(summary.rows[1].total_minutes, 30);
    }

    #[test]
    fn rows_sort_in_code_point_order() {
        let entries = [
            entry("0100", "b"),
            entry("0200", "A"),
            entry("0300", "Z"),
            entry("0400", "a"),
        ];
        let labels: Vec<String> = summarize(&entries)
            .unwrap()
            .rows
            .into_iter()
            .map(|row| row.activity_label)
            .collect();
        // Uppercase sorts before lowercase in code-point order.
        assert_eq!(labels, ["A", "Z", "a", "b"]);
    }

    #[test]
    fn blank_label_forms_its_own_group_and_sorts_first() {
        let entries = [entry("0100", "   "), entry("0200", "A")];
        let summary = summarize(&entries).unwrap();
        assert_eq!(summary.rows[0].activity_label, "");
        assert_eq!(summary.rows[0].total_minutes, 60);
        assert_eq!(summary.rows[1].activity_label, "A");
    }

    #[test]
    fn comments_do_not_split_groups() {
        let mut first = entry("0100", "A");
        first.comment = Some("morning".to_string());
        let mut second = entry("0200", "A");
        second.comment = Some("afternoon".to_string());

        let summary = summarize(&[first, second]).unwrap();
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].total_minutes, 120);
    }

    #[test]
    fn partition_sum_invariant() {
        let entries = [
            entry("0730", "sleep"),
            entry("0800", "breakfast"),
            entry("1200", "work"),
            entry("1245", "lunch"),
            entry("1700", "work"),
            entry("2400", "evening"),
        ];
        let summary = summarize(&entries).unwrap();

        let per_entry: i64 = (0..entries.len())
            .map(|i| {
                minutes_between(effective_start_time(&entries, i), &entries[i].end_time).unwrap()
            })
            .sum();
        assert_eq!(summary.total_minutes, per_entry);
        assert_eq!(per_entry, 1440);
    }

    #[test]
    fn negative_durations_flow_into_totals() {
        let entries = [entry("1000", "work"), entry("0930", "work")];
        let summary = summarize(&entries).unwrap();
        assert_eq!(summary.rows[0].total_minutes, 600 - 30);
    }

    #[test]
    fn summarize_propagates_time_errors() {
        let entries = [entry("0100", "A"), entry("9999", "B")];
        assert!(summarize(&entries).is_err());
    }
}
