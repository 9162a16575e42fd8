//! Index command - bring the index up to date with the transcripts on disk

use anyhow::{Context, Result};
use std::io::Write;

use conversation_core::Config;
use conversation_indexer::{index_all_conversations, IndexerDb, PassOutcome};

use crate::cli::{Cli, OutputFormat};
use crate::output::{human, json};

pub fn run(cli: &Cli, config: &Config, full_reindex: bool) -> Result<()> {
    let mut db = IndexerDb::open_with_config(config)
        .with_context(|| format!("Failed to open index at {}", config.db_path.display()))?;

    // Progress goes to stderr and only when a person is watching
    let show_progress = cli.format == OutputFormat::Human && atty::is(atty::Stream::Stderr);
    let mut stderr = std::io::stderr();

    let stats = index_all_conversations(
        &mut db,
        &config.projects_dir,
        full_reindex,
        |current, total, file, outcome| {
            if !show_progress {
                return;
            }
            let marker = match outcome {
                PassOutcome::Indexed { .. } => "+",
                PassOutcome::Unchanged => "=",
                PassOutcome::Failed { .. } => "!",
            };
            let _ = write!(stderr, "\r\x1b[K[{}/{}] {} {}", current, total, marker, file.uuid);
            if current == total {
                let _ = writeln!(stderr);
            }
        },
    )
    .with_context(|| format!("Indexing {} failed", config.projects_dir.display()))?;

    match cli.format {
        OutputFormat::Human => println!("{}", human::format_index_stats(&stats)),
        OutputFormat::Json => println!("{}", json::pretty(&json::index_stats(&stats))?),
    }

    Ok(())
}
