//! Core type definitions for the conversation index

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Longest summary shown for a match, in characters
pub const SUMMARY_MAX_CHARS: usize = 150;

/// Summary used when a conversation has no user message
pub const NO_SUMMARY: &str = "No summary available";

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    Tool,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            "tool" => Ok(Role::Tool),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// A searchable unit extracted from one transcript record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub timestamp: DateTime<Utc>,
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(timestamp: DateTime<Utc>, role: Role, content: impl Into<String>) -> Self {
        Self {
            timestamp,
            role,
            content: content.into(),
        }
    }
}

/// Conversation metadata row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    /// Transcript file stem, unique per conversation
    pub uuid: String,
    /// Decoded, human-readable project path
    pub project_path: String,
    /// Directory token the transcript lives under
    pub encoded_path: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub message_count: i64,
}

/// Incremental indexing progress for one conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexState {
    /// Number of non-blank transcript lines already committed
    pub last_indexed_line: usize,
    /// File modification time (ns since epoch) seen by the last pass
    pub fingerprint: i64,
}

/// A transcript file discovered on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationFile {
    pub uuid: String,
    pub file_path: PathBuf,
    pub project_path: String,
    pub encoded_path: String,
    /// Modification time in nanoseconds since the Unix epoch
    pub last_modified: i64,
}

/// Which conversations a search may return
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchScope {
    /// Only conversations stored under this encoded project token
    CurrentProject(String),
    AllProjects,
}

impl SearchScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchScope::CurrentProject(_) => "current_project",
            SearchScope::AllProjects => "all_projects",
        }
    }

    /// Project token when scoped to one project
    pub fn project(&self) -> Option<&str> {
        match self {
            SearchScope::CurrentProject(token) => Some(token),
            SearchScope::AllProjects => None,
        }
    }
}

/// A ranked search query
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub scope: SearchScope,
    pub limit: usize,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, scope: SearchScope) -> Self {
        Self {
            query: query.into(),
            scope,
            limit: 100,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// One conversation matching a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    #[serde(rename = "identifier")]
    pub uuid: String,
    pub project_path: String,
    pub encoded_path: String,
    pub created_at: String,
    pub last_updated: String,
    pub message_count: i64,
    pub summary: String,
    /// Larger is more relevant, never negative
    pub relevance_score: f64,
}

/// Full answer to a [`SearchRequest`]
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub scope: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_project: Option<String>,
    pub total_matches: usize,
    pub matches: Vec<Match>,
}

impl SearchResponse {
    pub fn new(request: &SearchRequest, matches: Vec<Match>) -> Self {
        Self {
            query: request.query.clone(),
            scope: request.scope.as_str().to_string(),
            current_project: request.scope.project().map(str::to_string),
            total_matches: matches.len(),
            matches,
        }
    }
}

/// Build the summary shown for a match from its first user message
pub fn summarize(first_user_message: Option<&str>) -> String {
    match first_user_message {
        Some(content) if !content.is_empty() => truncate_str(content, SUMMARY_MAX_CHARS),
        _ => NO_SUMMARY.to_string(),
    }
}

/// Truncate to at most `max_len` characters, ending in `...` when cut
pub fn truncate_str(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > max_len {
        let truncated: String = chars[..max_len.saturating_sub(3)].iter().collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}
