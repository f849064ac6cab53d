//! CLI subcommand implementations.

pub mod add;
pub mod clear;
pub mod import;
pub mod report;
pub mod show;
pub mod status;
