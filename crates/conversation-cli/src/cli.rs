//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use conversation_core::Config;

/// Full-text index and search over Claude conversation transcripts
#[derive(Parser, Debug)]
#[command(name = "cidx")]
#[command(version)]
#[command(about = "Index and search Claude conversation transcripts")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Custom database path
    #[arg(long, global = true, env = "CIDX_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Directory holding one transcript directory per project
    #[arg(long, global = true, env = "CIDX_PROJECTS_DIR")]
    pub projects_dir: Option<PathBuf>,

    /// How long to wait on a locked database, in milliseconds
    #[arg(long, global = true)]
    pub busy_timeout_ms: Option<u64>,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Default locations with command-line overrides applied
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(dir) = &self.projects_dir {
            config = config.with_projects_dir(dir);
        }
        if let Some(path) = &self.db_path {
            config = config.with_db_path(path);
        }
        if let Some(ms) = self.busy_timeout_ms {
            config = config.with_busy_timeout(Duration::from_millis(ms));
        }
        config
    }

    /// Check if colors should be used
    pub fn use_color(&self) -> bool {
        atty::is(atty::Stream::Stdout)
    }
}

/// Output format for commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output with colors
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}

/// Which conversations a search covers
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ScopeArg {
    /// Only the project given by --project (default: current directory)
    #[default]
    #[value(name = "current_project")]
    CurrentProject,
    /// Every indexed project
    #[value(name = "all_projects")]
    AllProjects,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Index new transcript content
    Index {
        /// Discard the existing index and rebuild it from scratch
        #[arg(short = 'f', long)]
        full_reindex: bool,
    },

    /// Search conversations using full-text search
    Search {
        /// Search query; all words must appear in one message
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Search scope
        #[arg(long, value_enum, default_value = "current_project")]
        scope: ScopeArg,

        /// Project path for the current_project scope
        #[arg(long)]
        project: Option<String>,

        /// Maximum number of conversations
        #[arg(short = 'n', long, default_value = "100")]
        limit: usize,
    },

    /// Show index status and statistics
    Status,
}
