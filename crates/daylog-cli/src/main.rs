use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use daylog_cli::commands::{add, clear, import, report, show, status};
use daylog_cli::{Cli, Commands, Config};
use daylog_store::SnapshotStore;

/// Load config and point the store at the snapshot path.
fn open_store(config_path: Option<&Path>) -> Result<SnapshotStore> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(SnapshotStore::new(config.log_path))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut stdout = io::stdout();

    match cli.command {
        Some(Commands::Add {
            end_time,
            activity,
            comment,
            date,
        }) => {
            let store = open_store(cli.config.as_deref())?;
            add::run(&mut stdout, &store, &end_time, &activity, comment, date)?;
        }
        Some(Commands::Show { json }) => {
            let store = open_store(cli.config.as_deref())?;
            show::run(&mut stdout, &store, json)?;
        }
        Some(Commands::Report { json, units }) => {
            let store = open_store(cli.config.as_deref())?;
            report::run(&mut stdout, &store, json, units)?;
        }
        Some(Commands::Import) => {
            let store = open_store(cli.config.as_deref())?;
            import::run(&mut stdout, &store, io::stdin().lock())?;
        }
        Some(Commands::Clear) => {
            let store = open_store(cli.config.as_deref())?;
            clear::run(&mut stdout, &store)?;
        }
        Some(Commands::Status) => {
            let store = open_store(cli.config.as_deref())?;
            status::run(&mut stdout, &store)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
