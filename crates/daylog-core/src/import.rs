//! Delimited-text import contract.
//!
//! Each non-blank line is split on runs of whitespace: the first field is
//! the end time, the second the activity label, and anything after that
//! re-joins as the comment.

use thiserror::Error;

use crate::entry::LogEntry;
use crate::log::ValidationError;

/// Errors from parsing a block of delimited log lines. Line numbers are
/// 1-based.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// A line had fewer than the two required fields.
    #[error("line {line}: expected an end time and an activity label")]
    MissingFields { line: usize },

    /// A line's entry failed append validation.
    #[error("line {line}: {source}")]
    InvalidEntry {
        line: usize,
        #[source]
        source: ValidationError,
    },
}

/// Parses whitespace-delimited log lines into entries.
///
/// Blank lines are skipped. Every parsed entry is checked against the
/// same validation `append` applies, so a successful parse batch-appends
/// cleanly.
pub fn parse_log_lines(input: &str) -> Result<Vec<LogEntry>, ImportError> {
    let mut entries = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let mut fields = raw.split_whitespace();
        let Some(end_time) = fields.next() else {
            continue; // blank line
        };
        let Some(activity_label) = fields.next() else {
            return Err(ImportError::MissingFields { line });
        };
        let comment = fields.collect::<Vec<_>>().join(" ");

        let entry = LogEntry {
            end_time: end_time.to_string(),
            activity_label: activity_label.to_string(),
            comment: (!comment.is_empty()).then_some(comment),
            date: None,
        };
        if let Err(source) = crate::log::validate(&entry) {
            return Err(ImportError::InvalidEntry { line, source });
        }
        entries.push(entry);
    }
    tracing::debug!(count = entries.len(), "parsed log lines");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_time_label_and_comment() {
        let entries = parse_log_lines("0930 email inbox first pass\n1200 work\n").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].end_time, "0930");
        assert_eq!(entries[0].activity_label, "email");
        assert_eq!(entries[0].comment.as_deref(), Some("inbox first pass"));
        assert_eq!(entries[1].activity_label, "work");
        assert_eq!(entries[1].comment, None);
    }

    #[test]
    fn splits_on_runs_of_whitespace() {
        let entries = parse_log_lines("0930\t\temail   inbox\t zero").unwrap();
        assert_eq!(entries[0].activity_label, "email");
        assert_eq!(entries[0].comment.as_deref(), Some("inbox zero"));
    }

    #[test]
    fn skips_blank_lines() {
        let entries = parse_log_lines("\n0930 email\n   \n1200 work\n\n").unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn rejects_lines_missing_a_label() {
        let err = parse_log_lines("0930 email\n1200\n").unwrap_err();
        assert_eq!(err, ImportError::MissingFields { line: 2 });
    }

    #[test]
    fn rejects_unparseable_end_times_with_line_number() {
        let err = parse_log_lines("0930 email\n2460 work\n").unwrap_err();
        assert!(matches!(err, ImportError::InvalidEntry { line: 2, .. }));
    }

    #[test]
    fn empty_input_parses_to_nothing() {
        assert!(parse_log_lines("").unwrap().is_empty());
    }
}
