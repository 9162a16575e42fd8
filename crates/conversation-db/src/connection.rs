//! Database connection management

use rusqlite::{Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use conversation_core::Config;

/// Database errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database not found at {0}")]
    NotFound(PathBuf),

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Database not initialized (run: cidx index)")]
    NotInitialized,

    #[error("Database version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Expected database version
pub const DB_VERSION: i32 = 1;

/// Read-only connection to the conversation index
pub struct ConversationDb {
    pub(crate) conn: Connection,
    path: PathBuf,
}

impl ConversationDb {
    /// Open the database described by `config`
    pub fn open_with_config(config: &Config) -> Result<Self, DbError> {
        Self::open(&config.db_path, config.busy_timeout)
    }

    /// Open the database at a specific path
    ///
    /// `busy_timeout` bounds how long a query waits while an indexer holds
    /// the write lock.
    pub fn open<P: AsRef<Path>>(path: P, busy_timeout: Duration) -> Result<Self, DbError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(DbError::NotFound(path));
        }

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(busy_timeout)?;

        // Check version
        let db = Self { conn, path };
        db.check_version()?;

        Ok(db)
    }

    /// Check database version
    fn check_version(&self) -> Result<(), DbError> {
        match self.version() {
            None => Err(DbError::NotInitialized),
            Some(v) if v < DB_VERSION => Err(DbError::VersionMismatch {
                expected: DB_VERSION,
                found: v,
            }),
            Some(_) => Ok(()),
        }
    }

    /// Schema version, `None` when the file is not an index at all
    fn version(&self) -> Option<i32> {
        self.conn
            .query_row(
                "SELECT CAST(value AS INTEGER) FROM metadata WHERE key = 'version'",
                [],
                |row| row.get(0),
            )
            .ok()
    }

    /// Get the database path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the underlying connection (for custom queries)
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats, DbError> {
        let version = self.version().unwrap_or(0);

        let count = |sql: &str| -> Result<i64, DbError> {
            Ok(self.conn.query_row(sql, [], |row| row.get(0))?)
        };
        let conversation_count = count("SELECT COUNT(*) FROM conversations")?;
        let message_count = count("SELECT COUNT(*) FROM messages")?;
        let index_state_count = count("SELECT COUNT(*) FROM index_state")?;

        let last_indexed: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM metadata WHERE key = 'last_indexed'",
                [],
                |row| row.get(0),
            )
            .optional()?;

        let db_size = std::fs::metadata(&self.path)
            .map(|m| m.len())
            .unwrap_or(0);

        Ok(DbStats {
            version,
            conversation_count,
            message_count,
            index_state_count,
            last_indexed,
            db_path: self.path.clone(),
            db_size_bytes: db_size,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DbStats {
    pub version: i32,
    pub conversation_count: i64,
    pub message_count: i64,
    pub index_state_count: i64,
    pub last_indexed: Option<String>,
    pub db_path: PathBuf,
    pub db_size_bytes: u64,
}

impl DbStats {
    /// Format database size as human-readable string
    pub fn format_size(&self) -> String {
        let bytes = self.db_size_bytes as f64;
        if bytes < 1024.0 {
            format!("{} B", bytes)
        } else if bytes < 1024.0 * 1024.0 {
            format!("{:.1} KB", bytes / 1024.0)
        } else if bytes < 1024.0 * 1024.0 * 1024.0 {
            format!("{:.1} MB", bytes / (1024.0 * 1024.0))
        } else {
            format!("{:.1} GB", bytes / (1024.0 * 1024.0 * 1024.0))
        }
    }
}
