//! conversation-cli - `cidx`, index and search Claude conversation transcripts

mod cli;
mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    if !cli.use_color() {
        colored::control::set_override(false);
    }

    let config = cli.config();

    match &cli.command {
        Command::Index { full_reindex } => commands::index::run(&cli, &config, *full_reindex),

        Command::Search {
            query,
            scope,
            project,
            limit,
        } => commands::search::run(
            &cli,
            &config,
            &query.join(" "),
            *scope,
            project.as_deref(),
            *limit,
        ),

        Command::Status => commands::status::run(&cli, &config),
    }
}

/// Log to stderr, honoring `RUST_LOG` when set
fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "info" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}
