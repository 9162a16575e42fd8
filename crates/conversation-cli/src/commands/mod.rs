//! CLI command implementations

pub mod index;
pub mod search;
pub mod status;
