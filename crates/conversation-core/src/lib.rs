//! conversation-core - Core types and transcript parsing for the conversation index
//!
//! Holds everything that does not touch the database: the data model, the
//! JSONL record parser, the project path codec and timestamp handling.

pub mod config;
pub mod error;
pub mod parser;
pub mod path_codec;
pub mod timestamp;
pub mod types;

pub use config::*;
pub use error::*;
pub use parser::*;
pub use path_codec::*;
pub use timestamp::*;
pub use types::*;
