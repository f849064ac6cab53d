//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Personal time-log tracker.
///
/// Record each activity as it ends; start times, durations and
/// per-activity totals are derived from the order of the log.
#[derive(Debug, Parser)]
#[command(name = "daylog", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record an activity that just ended.
    Add {
        /// End time in compact notation (e.g. 930, 1445, or 2400 for
        /// end of day).
        end_time: String,

        /// What the time was spent on.
        activity: String,

        /// Optional free-text note.
        #[arg(long)]
        comment: Option<String>,

        /// Calendar day stamp (YYYY-MM-DD).
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show the log with derived start times and durations.
    Show {
        /// Output rows as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Summarize total time per activity.
    Report {
        /// Output the summary as JSON.
        #[arg(long)]
        json: bool,

        /// Show duration units (tenths of an hour) instead of H:MM.
        #[arg(long)]
        units: bool,
    },

    /// Read whitespace-delimited entries from stdin and append them.
    ///
    /// Each line is: END_TIME ACTIVITY [COMMENT...]. Blank lines are
    /// skipped.
    Import,

    /// Delete every entry in the log.
    Clear,

    /// Show where the log is stored and what it holds.
    Status,
}
