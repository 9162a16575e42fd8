//! JSONL record parsing for transcript files
//!
//! One transcript line is one JSON record. User records with plain string
//! content and assistant records with content blocks yield searchable
//! [`Message`]s; every other record type yields nothing.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::CoreError;
use crate::timestamp::{parse_timestamp, parse_timestamp_or_now};
use crate::types::{Message, Role};

/// One transcript line, restricted to the fields the index reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Record {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cwd: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<RecordMessage>,
}

/// The `message` object of a record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordMessage {
    #[serde(default)]
    pub content: MessageContent,
}

/// Message content is either a plain string or a list of blocks
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(#[serde(deserialize_with = "lenient_blocks")] Vec<ContentBlock>),
    Other(Value),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Other(Value::Null)
    }
}

/// Content block inside an assistant message
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        #[serde(default, deserialize_with = "lenient")]
        text: Option<String>,
    },
    ToolUse {
        #[serde(default, deserialize_with = "lenient")]
        name: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        input: ToolInput,
    },
    ToolResult,
    Thinking,
    #[serde(other)]
    Unknown,
}

/// Tool input fields that carry searchable text
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default, deserialize_with = "lenient")]
    pub file_path: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub pattern: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub prompt: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub command: Option<String>,
}

/// Record type as far as indexing is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Assistant,
    Other,
}

/// Metadata read from the first record of a transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstRecordMeta {
    pub created_at: DateTime<Utc>,
    /// Working directory the session was started in, if recorded
    pub cwd: Option<String>,
}

impl FirstRecordMeta {
    /// Project path to store: the recorded cwd, else `fallback`
    pub fn project_path(&self, fallback: &str) -> String {
        self.cwd.clone().unwrap_or_else(|| fallback.to_string())
    }
}

/// Deserialize a field, treating values of the wrong shape as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Deserialize a block list, turning each unreadable block into `Unknown`
fn lenient_blocks<'de, D>(deserializer: D) -> Result<Vec<ContentBlock>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap_or(ContentBlock::Unknown))
        .collect())
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self.kind.as_deref() {
            Some("user") => RecordKind::User,
            Some("assistant") => RecordKind::Assistant,
            _ => RecordKind::Other,
        }
    }

    /// Extract the searchable messages of this record
    pub fn into_messages(self) -> Vec<Message> {
        let kind = self.kind();
        let timestamp = parse_timestamp_or_now(self.timestamp.as_deref());
        let content = match self.message {
            Some(message) => message.content,
            None => return Vec::new(),
        };

        match (kind, content) {
            (RecordKind::User, MessageContent::Text(text)) if !text.is_empty() => {
                vec![Message::new(timestamp, Role::User, text)]
            }
            (RecordKind::Assistant, MessageContent::Blocks(blocks)) => blocks
                .into_iter()
                .filter_map(|block| block.into_message(timestamp))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl ContentBlock {
    fn into_message(self, timestamp: DateTime<Utc>) -> Option<Message> {
        match self {
            ContentBlock::Text { text } => text
                .filter(|t| !t.is_empty())
                .map(|t| Message::new(timestamp, Role::Assistant, t)),
            ContentBlock::ToolUse { name, input } => {
                let content = tool_use_text(name.as_deref(), &input);
                (!content.is_empty()).then(|| Message::new(timestamp, Role::Tool, content))
            }
            ContentBlock::ToolResult | ContentBlock::Thinking | ContentBlock::Unknown => None,
        }
    }
}

/// Searchable text for a tool invocation
///
/// Parts appear in a fixed order: tool name, file, pattern, description,
/// prompt, command.
pub fn tool_use_text(name: Option<&str>, input: &ToolInput) -> String {
    let parts = [
        name.map(|n| format!("Tool: {}", n)),
        input.file_path.as_ref().map(|p| format!("File: {}", p)),
        input.pattern.as_ref().map(|p| format!("Pattern: {}", p)),
        input.description.clone(),
        input.prompt.clone(),
        input.command.as_ref().map(|c| format!("Command: {}", c)),
    ];

    parts.into_iter().flatten().collect::<Vec<_>>().join(" ")
}

/// Parse one JSONL line into a record
pub fn parse_record(line: &str) -> Result<Record, CoreError> {
    Ok(serde_json::from_str(line.trim())?)
}

/// Parse one JSONL line into zero or more messages
///
/// Blank lines yield nothing. Malformed JSON is an error; the caller decides
/// whether to skip the line.
pub fn parse_line(line: &str) -> Result<Vec<Message>, CoreError> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(parse_record(line)?.into_messages())
}

/// Read creation metadata from the first line of a transcript
///
/// A malformed line or missing/unparsable timestamp falls back to the current
/// time; a missing or empty `cwd` is reported as absent.
pub fn first_record_meta(first_line: &str) -> FirstRecordMeta {
    let record = parse_record(first_line).unwrap_or_default();
    let created_at = record
        .timestamp
        .as_deref()
        .and_then(|t| parse_timestamp(t).ok())
        .unwrap_or_else(Utc::now);
    let cwd = record.cwd.filter(|c| !c.is_empty());

    FirstRecordMeta { created_at, cwd }
}
