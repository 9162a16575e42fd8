//! Database schema creation
//!
//! `messages_fts` is an external-content FTS5 table over `messages.content`.
//! Triggers keep it in step with every insert, update and delete, inside the
//! same transaction as the row change.

use rusqlite::Connection;

/// Current database schema version
pub const DB_VERSION: i32 = 1;

/// Initialize the database schema (idempotent)
pub fn init_schema(conn: &mut Connection) -> rusqlite::Result<()> {
    // Metadata table
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS metadata (
            key TEXT PRIMARY KEY,
            value TEXT
        )",
    )?;

    // One row per transcript file
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS conversations (
            uuid TEXT PRIMARY KEY,
            project_path TEXT NOT NULL,
            encoded_path TEXT NOT NULL,
            created_at TEXT NOT NULL,
            last_updated TEXT NOT NULL,
            message_count INTEGER NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS idx_conversations_encoded_path ON conversations(encoded_path);",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS messages (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            conversation_uuid TEXT NOT NULL REFERENCES conversations(uuid),
            timestamp TEXT NOT NULL,
            role TEXT NOT NULL,
            content TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_messages_conversation
            ON messages(conversation_uuid, role, timestamp);",
    )?;

    conn.execute_batch(
        "CREATE VIRTUAL TABLE IF NOT EXISTS messages_fts USING fts5(
            content,
            conversation_uuid UNINDEXED,
            content='messages',
            content_rowid='id'
        )",
    )?;

    conn.execute_batch(
        "CREATE TRIGGER IF NOT EXISTS messages_ai AFTER INSERT ON messages BEGIN
            INSERT INTO messages_fts(rowid, content, conversation_uuid)
            VALUES (new.id, new.content, new.conversation_uuid);
        END;

        CREATE TRIGGER IF NOT EXISTS messages_ad AFTER DELETE ON messages BEGIN
            INSERT INTO messages_fts(messages_fts, rowid, content, conversation_uuid)
            VALUES ('delete', old.id, old.content, old.conversation_uuid);
        END;

        CREATE TRIGGER IF NOT EXISTS messages_au AFTER UPDATE ON messages BEGIN
            INSERT INTO messages_fts(messages_fts, rowid, content, conversation_uuid)
            VALUES ('delete', old.id, old.content, old.conversation_uuid);
            INSERT INTO messages_fts(rowid, content, conversation_uuid)
            VALUES (new.id, new.content, new.conversation_uuid);
        END;",
    )?;

    // Incremental indexing watermark per conversation
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS index_state (
            conversation_uuid TEXT PRIMARY KEY,
            last_indexed_line INTEGER NOT NULL DEFAULT 0,
            fingerprint INTEGER NOT NULL,
            indexed_at TEXT NOT NULL
        )",
    )?;

    conn.execute(
        "INSERT OR REPLACE INTO metadata (key, value) VALUES ('version', ?1)",
        [&DB_VERSION.to_string()],
    )?;

    Ok(())
}
