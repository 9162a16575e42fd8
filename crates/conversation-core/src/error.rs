//! Error types for transcript parsing

use thiserror::Error;

/// Errors produced while turning transcript text into messages
#[derive(Error, Debug)]
pub enum CoreError {
    /// The record is not valid JSON (or not the expected shape)
    #[error("Malformed transcript record: {0}")]
    Parse(#[from] serde_json::Error),

    /// None of the accepted timestamp formats matched
    #[error("Unrecognized timestamp: {0:?}")]
    Timestamp(String),
}
