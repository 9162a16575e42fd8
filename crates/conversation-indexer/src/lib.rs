//! conversation-indexer - Indexing pipeline for the conversation index
//!
//! This crate owns all **write** operations to the SQLite store.
//! The companion `conversation-db` crate provides read-only access for search.
//! Both share the same `~/.claude/conversation-index.db` file.

pub mod connection;
pub mod discovery;
pub mod indexer;
pub mod rebuild;
pub mod schema;
pub mod store;

pub use connection::{IndexerDb, IndexerError};
pub use discovery::{mtime_nanos, Scanner, TRANSCRIPT_EXTENSION};
pub use indexer::{
    decide, index_all_conversations, index_conversation, read_lines, run_index, Decision,
    IndexStats, PassOutcome,
};
pub use rebuild::truncate_all;
pub use schema::{init_schema, DB_VERSION};
