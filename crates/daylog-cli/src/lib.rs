//! Day log CLI library.
//!
//! This crate provides the command-line interface over the daylog engine.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
