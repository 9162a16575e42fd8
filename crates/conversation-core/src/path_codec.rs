//! Project path <-> directory name codec
//!
//! Claude Code stores each project's transcripts under a directory named after
//! the project path with every `/` replaced by `-`. The mapping is lossy: a
//! project whose path contains `-` does not decode back to itself. Keep it that
//! way, existing directories on disk depend on it.

/// Separator in project paths
const SEPARATOR: char = '/';

/// Character that replaces the separator in encoded tokens
const FILLER: char = '-';

/// Encode a project path into a directory-safe token
///
/// `/Users/foo/bar` becomes `-Users-foo-bar`.
pub fn encode_project_path(path: &str) -> String {
    match path.strip_prefix(SEPARATOR) {
        Some(rest) => format!("{}{}", FILLER, rest.replace(SEPARATOR, &FILLER.to_string())),
        None => path.replace(SEPARATOR, &FILLER.to_string()),
    }
}

/// Decode a directory token back into a project path
///
/// `-Users-foo-bar` becomes `/Users/foo/bar`. Tokens without the leading
/// filler are returned unchanged.
pub fn decode_project_path(encoded: &str) -> String {
    match encoded.strip_prefix(FILLER) {
        Some(rest) => format!("{}{}", SEPARATOR, rest.replace(FILLER, &SEPARATOR.to_string())),
        None => encoded.to_string(),
    }
}
