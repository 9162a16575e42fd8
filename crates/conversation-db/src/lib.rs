//! conversation-db - Read-only search over the conversation index
//!
//! Opens the store written by `conversation-indexer` without write access,
//! so any number of searches can run next to an indexing run.

pub mod connection;
pub mod queries;

pub use connection::*;
pub use queries::*;
