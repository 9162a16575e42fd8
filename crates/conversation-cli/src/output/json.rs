//! JSON output formatting

use serde_json::{json, Value};

use conversation_db::DbStats;
use conversation_indexer::IndexStats;

/// Output a serializable value as pretty JSON
pub fn pretty<T: serde::Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Totals of an indexing run
pub fn index_stats(stats: &IndexStats) -> Value {
    json!({
        "messages": stats.messages,
        "conversations": stats.conversations,
        "skipped": stats.skipped,
        "failed": stats.failed,
        "elapsed_ms": stats.elapsed.as_millis() as u64,
    })
}

/// Store statistics
pub fn db_stats(stats: &DbStats) -> Value {
    json!({
        "db_path": stats.db_path.to_string_lossy(),
        "db_size_bytes": stats.db_size_bytes,
        "version": stats.version,
        "conversation_count": stats.conversation_count,
        "message_count": stats.message_count,
        "index_state_count": stats.index_state_count,
        "last_indexed": stats.last_indexed,
        "status": "healthy"
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_index_stats_fields() {
        let value = index_stats(&IndexStats {
            conversations: 2,
            messages: 9,
            skipped: 1,
            failed: 0,
            elapsed: Duration::from_millis(15),
        });
        assert_eq!(value["messages"], 9);
        assert_eq!(value["conversations"], 2);
        assert_eq!(value["skipped"], 1);
        assert_eq!(value["elapsed_ms"], 15);
    }
}
