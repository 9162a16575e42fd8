//! Storage locations and store tuning
//!
//! Every component takes its paths from a [`Config`] value instead of reading
//! the environment itself, so tests can run several independent indexes.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long a store call waits on a lock held by another process
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Database file name under the Claude directory
pub const DB_FILE_NAME: &str = "conversation-index.db";

/// Locations of the transcripts and of the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root holding one directory per project (`~/.claude/projects`)
    pub projects_dir: PathBuf,
    /// SQLite index file
    pub db_path: PathBuf,
    pub busy_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
        Self::from_home(&home)
    }
}

impl Config {
    /// Standard layout under `<home>/.claude`
    pub fn from_home(home: &Path) -> Self {
        let claude_dir = home.join(".claude");
        Self {
            projects_dir: claude_dir.join("projects"),
            db_path: claude_dir.join(DB_FILE_NAME),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub fn with_projects_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.projects_dir = dir.into();
        self
    }

    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}
