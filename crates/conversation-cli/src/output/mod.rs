//! Terminal and JSON rendering

pub mod colors;
pub mod human;
pub mod json;
