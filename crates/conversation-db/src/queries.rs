//! Full-text search over indexed conversations

use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use conversation_core::{summarize, Match, SearchRequest, SearchResponse};

use crate::connection::{ConversationDb, DbError};

/// Turn free text into an FTS5 query of literal terms
///
/// Every whitespace-separated word becomes a quoted phrase, so operator
/// syntax in user input is never interpreted. Words are implicitly ANDed.
/// Words without any letter or digit cannot match anything and are dropped.
/// Returns `None` when no word survives.
pub fn fts_query(query: &str) -> Option<String> {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(|w| w.replace('"', ""))
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .map(|w| format!("\"{}\"", w))
        .collect();

    (!terms.is_empty()).then(|| terms.join(" "))
}

/// Best-ranked hit of one conversation
struct Hit {
    conversation: Match,
    /// Raw bm25 value; more negative is more relevant
    rank: f64,
}

fn hit_from_row(row: &Row) -> rusqlite::Result<Hit> {
    Ok(Hit {
        conversation: Match {
            uuid: row.get(0)?,
            project_path: row.get(1)?,
            encoded_path: row.get(2)?,
            created_at: row.get(3)?,
            last_updated: row.get(4)?,
            message_count: row.get(5)?,
            summary: String::new(),
            relevance_score: 0.0,
        },
        rank: row.get(6)?,
    })
}

impl ConversationDb {
    /// Search conversations, one result per conversation, best first
    ///
    /// A conversation ranks by its best matching message. bm25 cannot be an
    /// aggregate argument, so per-message ranks are materialized first and
    /// grouped afterwards.
    pub fn search(&self, request: &SearchRequest) -> Result<Vec<Match>, DbError> {
        let Some(fts) = fts_query(&request.query) else {
            return Ok(Vec::new());
        };

        let scope_filter = if request.scope.project().is_some() {
            "WHERE c.encoded_path = ?3"
        } else {
            ""
        };
        let sql = format!(
            r#"
            WITH ranked AS MATERIALIZED (
                SELECT m.conversation_uuid AS uuid, bm25(messages_fts) AS score
                FROM messages_fts
                JOIN messages m ON messages_fts.rowid = m.id
                WHERE messages_fts MATCH ?1
            )
            SELECT
                c.uuid, c.project_path, c.encoded_path, c.created_at,
                c.last_updated, c.message_count, MIN(r.score) AS best
            FROM ranked r
            JOIN conversations c ON c.uuid = r.uuid
            {}
            GROUP BY c.uuid
            ORDER BY best ASC, c.last_updated DESC
            LIMIT ?2
            "#,
            scope_filter
        );

        let limit = i64::try_from(request.limit).unwrap_or(i64::MAX);
        let mut stmt = self.conn.prepare(&sql)?;
        let hits = match request.scope.project() {
            Some(token) => stmt.query_map(params![fts, limit, token], hit_from_row)?,
            None => stmt.query_map(params![fts, limit], hit_from_row)?,
        }
        .collect::<Result<Vec<_>, _>>()?;

        debug!(query = %fts, matches = hits.len(), scope = request.scope.as_str(), "Search");

        hits.into_iter()
            .map(|hit| {
                let first = self.first_user_message(&hit.conversation.uuid)?;
                Ok(Match {
                    summary: summarize(first.as_deref()),
                    relevance_score: hit.rank.abs(),
                    ..hit.conversation
                })
            })
            .collect()
    }

    /// Search and wrap the matches with the request that produced them
    pub fn search_response(&self, request: &SearchRequest) -> Result<SearchResponse, DbError> {
        let matches = self.search(request)?;
        Ok(SearchResponse::new(request, matches))
    }

    /// Content of the earliest user message of a conversation
    pub fn first_user_message(&self, uuid: &str) -> Result<Option<String>, DbError> {
        let content: Option<Option<String>> = self
            .conn
            .query_row(
                "SELECT content FROM messages
                 WHERE conversation_uuid = ?1 AND role = 'user'
                 ORDER BY timestamp ASC, id ASC
                 LIMIT 1",
                [uuid],
                |row| row.get(0),
            )
            .optional()?;
        Ok(content.flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fts_query_quotes_each_word() {
        assert_eq!(fts_query("hello world").as_deref(), Some("\"hello\" \"world\""));
        assert_eq!(fts_query("  spaced\tout\n").as_deref(), Some("\"spaced\" \"out\""));
    }

    #[test]
    fn test_fts_query_neutralizes_syntax() {
        assert_eq!(
            fts_query("a OR b NOT c*").as_deref(),
            Some("\"a\" \"OR\" \"b\" \"NOT\" \"c*\"")
        );
        assert_eq!(fts_query("say \"hi\"").as_deref(), Some("\"say\" \"hi\""));
    }

    #[test]
    fn test_fts_query_empty() {
        assert_eq!(fts_query(""), None);
        assert_eq!(fts_query("   "), None);
        assert_eq!(fts_query("\"\" \""), None);
        assert_eq!(fts_query("( ) -- ?"), None);
        assert_eq!(fts_query("( rust )").as_deref(), Some("\"rust\""));
    }
}
