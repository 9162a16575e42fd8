//! Index reset
//!
//! Empties the store ahead of a full reindex. Tables, triggers and the schema
//! version stay in place.

use crate::connection::{IndexerDb, IndexerError};

/// Remove every conversation, message and index state in one transaction
pub fn truncate_all(db: &mut IndexerDb) -> Result<(), IndexerError> {
    db.transaction(|conn| {
        // Message deletes go through the FTS triggers
        conn.execute_batch(
            "DELETE FROM messages;
             DELETE FROM conversations;
             DELETE FROM index_state;
             DELETE FROM metadata WHERE key = 'last_indexed';",
        )?;
        Ok(())
    })
}
