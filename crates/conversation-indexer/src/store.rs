//! Write-side store operations
//!
//! Free functions take a `&Connection` so the orchestrator can compose several
//! of them inside one transaction; [`IndexerDb`] exposes the same operations
//! as methods for standalone use.

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use conversation_core::{format_timestamp, parse_timestamp, Conversation, IndexState, Message};

use crate::connection::{IndexerDb, IndexerError};

/// Insert a conversation or refresh its paths and last-updated time
///
/// `created_at` is only written on insert and `message_count` is never
/// touched here.
pub fn upsert_conversation(conn: &Connection, conv: &Conversation) -> Result<(), IndexerError> {
    conn.execute(
        "INSERT INTO conversations
         (uuid, project_path, encoded_path, created_at, last_updated, message_count)
         VALUES (?1, ?2, ?3, ?4, ?5, 0)
         ON CONFLICT(uuid) DO UPDATE SET
            project_path = excluded.project_path,
            encoded_path = excluded.encoded_path,
            last_updated = excluded.last_updated",
        params![
            conv.uuid,
            conv.project_path,
            conv.encoded_path,
            format_timestamp(&conv.created_at),
            format_timestamp(&conv.last_updated),
        ],
    )?;
    Ok(())
}

/// Fetch a stored conversation row
pub fn get_conversation(conn: &Connection, uuid: &str) -> Result<Option<Conversation>, IndexerError> {
    let conv = conn
        .query_row(
            "SELECT uuid, project_path, encoded_path, created_at, last_updated, message_count
             FROM conversations WHERE uuid = ?1",
            [uuid],
            |row| {
                Ok(Conversation {
                    uuid: row.get(0)?,
                    project_path: row.get(1)?,
                    encoded_path: row.get(2)?,
                    created_at: timestamp_column(row, 3)?,
                    last_updated: timestamp_column(row, 4)?,
                    message_count: row.get(5)?,
                })
            },
        )
        .optional()?;
    Ok(conv)
}

fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let text: String = row.get(idx)?;
    parse_timestamp(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Append a batch of messages and bump the conversation's message count
///
/// The inserts and the count update share one savepoint: either the whole
/// batch is visible or none of it is. An empty batch does nothing.
pub fn append_messages(
    conn: &Connection,
    uuid: &str,
    messages: &[Message],
) -> Result<usize, IndexerError> {
    if messages.is_empty() {
        return Ok(0);
    }

    conn.execute_batch("SAVEPOINT append_messages")?;

    let result = insert_batch(conn, uuid, messages);
    match result {
        Ok(()) => {
            conn.execute_batch("RELEASE append_messages")?;
            Ok(messages.len())
        }
        Err(e) => {
            conn.execute_batch("ROLLBACK TO append_messages; RELEASE append_messages")?;
            Err(e)
        }
    }
}

fn insert_batch(conn: &Connection, uuid: &str, messages: &[Message]) -> Result<(), IndexerError> {
    let mut insert_stmt = conn.prepare_cached(
        "INSERT INTO messages (conversation_uuid, timestamp, role, content)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    for message in messages {
        insert_stmt.execute(params![
            uuid,
            format_timestamp(&message.timestamp),
            message.role.as_str(),
            message.content,
        ])?;
    }

    conn.execute(
        "UPDATE conversations SET message_count = message_count + ?1 WHERE uuid = ?2",
        params![messages.len() as i64, uuid],
    )?;
    Ok(())
}

/// Read the indexing watermark; `None` means never indexed
pub fn get_index_state(conn: &Connection, uuid: &str) -> Result<Option<IndexState>, IndexerError> {
    let state = conn
        .query_row(
            "SELECT last_indexed_line, fingerprint FROM index_state WHERE conversation_uuid = ?1",
            [uuid],
            |row| {
                Ok(IndexState {
                    last_indexed_line: row.get::<_, i64>(0)?.max(0) as usize,
                    fingerprint: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(state)
}

/// Record the indexing watermark for a conversation
pub fn set_index_state(
    conn: &Connection,
    uuid: &str,
    state: &IndexState,
) -> Result<(), IndexerError> {
    conn.execute(
        "INSERT OR REPLACE INTO index_state
         (conversation_uuid, last_indexed_line, fingerprint, indexed_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            uuid,
            state.last_indexed_line as i64,
            state.fingerprint,
            format_timestamp(&Utc::now()),
        ],
    )?;
    Ok(())
}

/// Remove every message of a conversation and reset its count
///
/// The conversation row and its index state are left in place.
pub fn delete_conversation_messages(conn: &Connection, uuid: &str) -> Result<usize, IndexerError> {
    let deleted = conn.execute("DELETE FROM messages WHERE conversation_uuid = ?1", [uuid])?;
    conn.execute(
        "UPDATE conversations SET message_count = 0 WHERE uuid = ?1",
        [uuid],
    )?;
    Ok(deleted)
}

/// Forget the indexing watermark of a conversation
pub fn delete_index_state(conn: &Connection, uuid: &str) -> Result<(), IndexerError> {
    conn.execute("DELETE FROM index_state WHERE conversation_uuid = ?1", [uuid])?;
    Ok(())
}

/// Stamp the time of the last completed indexing run
pub fn set_last_indexed(conn: &Connection, at: &DateTime<Utc>) -> Result<(), IndexerError> {
    conn.execute(
        "INSERT OR REPLACE INTO metadata (key, value) VALUES ('last_indexed', ?1)",
        [format_timestamp(at)],
    )?;
    Ok(())
}

impl IndexerDb {
    pub fn upsert_conversation(&self, conv: &Conversation) -> Result<(), IndexerError> {
        upsert_conversation(&self.conn, conv)
    }

    pub fn get_conversation(&self, uuid: &str) -> Result<Option<Conversation>, IndexerError> {
        get_conversation(&self.conn, uuid)
    }

    pub fn append_messages(&self, uuid: &str, messages: &[Message]) -> Result<usize, IndexerError> {
        append_messages(&self.conn, uuid, messages)
    }

    pub fn get_index_state(&self, uuid: &str) -> Result<Option<IndexState>, IndexerError> {
        get_index_state(&self.conn, uuid)
    }

    pub fn set_index_state(&self, uuid: &str, state: &IndexState) -> Result<(), IndexerError> {
        set_index_state(&self.conn, uuid, state)
    }

    pub fn delete_conversation_messages(&self, uuid: &str) -> Result<usize, IndexerError> {
        delete_conversation_messages(&self.conn, uuid)
    }

    pub fn delete_index_state(&self, uuid: &str) -> Result<(), IndexerError> {
        delete_index_state(&self.conn, uuid)
    }
}
