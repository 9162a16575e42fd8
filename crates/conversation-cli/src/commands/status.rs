//! Status command - show index statistics

use anyhow::Result;

use conversation_core::Config;
use conversation_db::{ConversationDb, DbError};

use crate::cli::{Cli, OutputFormat};
use crate::output::{colors, human, json};

pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let db = match ConversationDb::open_with_config(config) {
        Ok(db) => db,
        Err(DbError::NotFound(path)) => {
            match cli.format {
                OutputFormat::Human => {
                    println!("{}", colors::error("Database not found"));
                    println!();
                    println!("  {}: {}", colors::label("Expected at"), path.display());
                    println!();
                    println!("Build it with:");
                    println!("  cidx index");
                }
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "status": "not_found",
                        "db_path": path.to_string_lossy(),
                        "error": "Database not found"
                    });
                    println!("{}", json::pretty(&output)?);
                }
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let stats = db.stats()?;

    match cli.format {
        OutputFormat::Human => {
            println!("{}", human::format_stats(&stats));
            println!();
            println!("{}", colors::success("Index is healthy"));
        }
        OutputFormat::Json => println!("{}", json::pretty(&json::db_stats(&stats))?),
    }

    Ok(())
}
