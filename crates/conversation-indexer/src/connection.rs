//! Read-write database connection for indexing operations

use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use conversation_core::{Config, DEFAULT_BUSY_TIMEOUT};

use crate::schema;

/// Indexer errors
#[derive(Error, Debug)]
pub enum IndexerError {
    /// A store operation failed; contained to the current conversation
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The projects directory is missing; aborts the run
    #[error("Projects directory does not exist: {0}")]
    RootNotFound(PathBuf),

    /// The store could not be opened or initialized; aborts the run
    #[error("Cannot open index at {path}: {reason}")]
    StoreUnavailable { path: PathBuf, reason: String },
}

impl IndexerError {
    fn unavailable(path: &Path, reason: impl ToString) -> Self {
        IndexerError::StoreUnavailable {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

/// Read-write database connection for indexing
pub struct IndexerDb {
    pub(crate) conn: Connection,
    path: PathBuf,
}

impl IndexerDb {
    /// Open or create the database described by `config`
    pub fn open_with_config(config: &Config) -> Result<Self, IndexerError> {
        Self::open_or_create(&config.db_path, config.busy_timeout)
    }

    /// Open or create the database at a specific path
    pub fn open_or_create(path: &Path, busy_timeout: Duration) -> Result<Self, IndexerError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| IndexerError::unavailable(path, e))?;
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| IndexerError::unavailable(path, e))?;

        Self::init(conn, path.to_path_buf(), busy_timeout)
    }

    /// In-memory database, mostly for tests
    pub fn open_in_memory() -> Result<Self, IndexerError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| IndexerError::unavailable(Path::new(":memory:"), e))?;
        Self::init(conn, PathBuf::from(":memory:"), DEFAULT_BUSY_TIMEOUT)
    }

    fn init(conn: Connection, path: PathBuf, busy_timeout: Duration) -> Result<Self, IndexerError> {
        // Concurrent searchers and a second indexer wait instead of failing
        conn.busy_timeout(busy_timeout)
            .map_err(|e| IndexerError::unavailable(&path, e))?;
        conn.execute_batch(
            "PRAGMA synchronous = NORMAL;
             PRAGMA foreign_keys = OFF;",
        )
        .map_err(|e| IndexerError::unavailable(&path, e))?;

        let mut db = Self { conn, path };
        schema::init_schema(&mut db.conn).map_err(|e| IndexerError::unavailable(&db.path, e))?;

        Ok(db)
    }

    /// Get the database path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Execute a closure within a transaction
    pub fn transaction<F, T>(&mut self, f: F) -> Result<T, IndexerError>
    where
        F: FnOnce(&Connection) -> Result<T, IndexerError>,
    {
        let tx = self.conn.transaction()?;
        let result = f(&tx)?;
        tx.commit()?;
        Ok(result)
    }
}
