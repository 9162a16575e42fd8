//! Incremental transcript indexer
//!
//! Each conversation is handled by one pass: compare the stored watermark and
//! fingerprint with the file on disk, decide what to do, parse only the new
//! lines, and commit the conversation row, the message batch and the new
//! watermark in a single transaction.

use chrono::{DateTime, TimeZone, Utc};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use conversation_core::{
    first_record_meta, parse_line, Config, Conversation, ConversationFile, IndexState, Message,
};

use crate::connection::{IndexerDb, IndexerError};
use crate::discovery::Scanner;
use crate::rebuild::truncate_all;
use crate::store;

/// What a pass does with one conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Never indexed: parse from the first line
    Fresh,
    /// Parse lines from `start` onwards
    Append { start: usize },
    /// The file shrank below the watermark: purge and parse from scratch
    Rollback,
    /// Nothing to do
    NoChange,
}

/// Choose the action for a conversation from its stored state and the file
///
/// `line_count` is the number of non-blank lines currently in the file.
pub fn decide(prior: Option<&IndexState>, line_count: usize, fingerprint: i64) -> Decision {
    match prior {
        None => Decision::Fresh,
        Some(state) if state.fingerprint == fingerprint => Decision::NoChange,
        Some(state) if line_count < state.last_indexed_line => Decision::Rollback,
        Some(state) => Decision::Append {
            start: state.last_indexed_line,
        },
    }
}

/// Result of one conversation's pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// New content was committed
    Indexed { messages: usize, rolled_back: bool },
    /// The file had nothing new since the last pass
    Unchanged,
    /// The pass hit an error; nothing of it was committed
    Failed { error: String },
}

/// Totals for one indexing run
#[derive(Debug, Clone, Default)]
pub struct IndexStats {
    /// Conversations whose pass completed, unchanged ones included
    pub conversations: usize,
    /// Messages newly committed
    pub messages: usize,
    /// Conversations left unchanged
    pub skipped: usize,
    /// Conversations whose pass failed
    pub failed: usize,
    pub elapsed: Duration,
}

/// Read a transcript as trimmed, non-blank lines
///
/// Invalid UTF-8 is replaced rather than rejected so one bad byte cannot make
/// the whole file unreadable.
pub fn read_lines(path: &Path) -> Result<Vec<String>, IndexerError> {
    let bytes = std::fs::read(path)?;
    let lines = bytes
        .split(|b| *b == b'\n')
        .map(|chunk| String::from_utf8_lossy(chunk).trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    Ok(lines)
}

fn fingerprint_time(fingerprint: i64) -> DateTime<Utc> {
    Utc.timestamp_nanos(fingerprint)
}

/// Run one pass over a single conversation file
pub fn index_conversation(
    db: &mut IndexerDb,
    file: &ConversationFile,
) -> Result<PassOutcome, IndexerError> {
    let prior = db.get_index_state(&file.uuid)?;

    // An unchanged fingerprint means the file is not even read
    if let Some(state) = &prior {
        if state.fingerprint == file.last_modified {
            return Ok(PassOutcome::Unchanged);
        }
    }

    let lines = read_lines(&file.file_path)?;
    let line_count = lines.len();

    let decision = decide(prior.as_ref(), line_count, file.last_modified);
    let (start, rolled_back) = match decision {
        Decision::NoChange => return Ok(PassOutcome::Unchanged),
        Decision::Fresh => (0, false),
        Decision::Append { start } => (start, false),
        Decision::Rollback => {
            info!(
                conversation = %file.uuid,
                was = prior.map(|s| s.last_indexed_line).unwrap_or(0),
                now = line_count,
                "Rollback detected, rebuilding conversation"
            );
            (0, true)
        }
    };

    if rolled_back && line_count == 0 {
        db.transaction(|conn| purge(conn, &file.uuid))?;
        return Ok(PassOutcome::Unchanged);
    }

    if line_count <= start {
        return Ok(PassOutcome::Unchanged);
    }

    let messages = parse_lines(&file.uuid, &lines, start);
    let committed = messages.len();
    let appending = matches!(decision, Decision::Append { .. });

    db.transaction(|conn| {
        if rolled_back {
            purge(conn, &file.uuid)?;
        }

        let conversation = conversation_row(conn, file, &lines[0], appending)?;
        store::upsert_conversation(conn, &conversation)?;
        store::append_messages(conn, &file.uuid, &messages)?;
        store::set_index_state(
            conn,
            &file.uuid,
            &IndexState {
                last_indexed_line: line_count,
                fingerprint: file.last_modified,
            },
        )
    })?;

    debug!(
        conversation = %file.uuid,
        start,
        lines = line_count,
        messages = committed,
        "Indexed conversation"
    );

    Ok(PassOutcome::Indexed {
        messages: committed,
        rolled_back,
    })
}

fn purge(conn: &Connection, uuid: &str) -> Result<(), IndexerError> {
    store::delete_conversation_messages(conn, uuid)?;
    store::delete_index_state(conn, uuid)
}

fn parse_lines(uuid: &str, lines: &[String], start: usize) -> Vec<Message> {
    let mut messages = Vec::new();
    for (offset, line) in lines[start..].iter().enumerate() {
        match parse_line(line) {
            Ok(mut parsed) => messages.append(&mut parsed),
            Err(e) => {
                debug!(
                    conversation = %uuid,
                    line = start + offset + 1,
                    error = %e,
                    "Skipping malformed record"
                );
            }
        }
    }
    messages
}

/// Conversation row for this pass
///
/// Appending reuses the stored creation time and project path; otherwise they
/// come from the first record of the file.
fn conversation_row(
    conn: &Connection,
    file: &ConversationFile,
    first_line: &str,
    appending: bool,
) -> Result<Conversation, IndexerError> {
    let stored = if appending {
        store::get_conversation(conn, &file.uuid)?
    } else {
        None
    };

    let (created_at, project_path) = match stored {
        Some(existing) => (existing.created_at, existing.project_path),
        None => {
            let meta = first_record_meta(first_line);
            let project_path = meta.project_path(&file.project_path);
            (meta.created_at, project_path)
        }
    };

    Ok(Conversation {
        uuid: file.uuid.clone(),
        project_path,
        encoded_path: file.encoded_path.clone(),
        created_at,
        last_updated: fingerprint_time(file.last_modified),
        message_count: 0,
    })
}

/// Index every conversation under `projects_dir`
///
/// With `full_reindex` the store is emptied first and every file is treated
/// as never seen. Only a missing projects directory or a store failure
/// outside a single conversation aborts the run.
pub fn index_all_conversations<F>(
    db: &mut IndexerDb,
    projects_dir: &Path,
    full_reindex: bool,
    mut on_progress: F,
) -> Result<IndexStats, IndexerError>
where
    F: FnMut(usize, usize, &ConversationFile, &PassOutcome),
{
    let started = Instant::now();
    let files = Scanner::new(projects_dir).scan()?;

    if full_reindex {
        info!("Performing full reindex");
        truncate_all(db)?;
    }

    let total = files.len();
    let mut stats = IndexStats::default();

    for (i, file) in files.iter().enumerate() {
        let outcome = match index_conversation(db, file) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(conversation = %file.uuid, error = %e, "Failed to index conversation");
                PassOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };

        match &outcome {
            PassOutcome::Indexed { messages, .. } => {
                stats.conversations += 1;
                stats.messages += messages;
            }
            PassOutcome::Unchanged => {
                stats.conversations += 1;
                stats.skipped += 1;
            }
            PassOutcome::Failed { .. } => stats.failed += 1,
        }

        on_progress(i + 1, total, file, &outcome);
    }

    // Passes have already committed; the stamp is best effort
    if let Err(e) = store::set_last_indexed(&db.conn, &Utc::now()) {
        warn!(error = %e, "Failed to record last indexed time");
    }

    stats.elapsed = started.elapsed();
    info!(
        "Indexed {} messages from {} conversations ({} skipped) in {}ms",
        stats.messages,
        stats.conversations,
        stats.skipped,
        stats.elapsed.as_millis()
    );

    Ok(stats)
}

/// Open the store described by `config` and index its projects directory
pub fn run_index(config: &Config, full_reindex: bool) -> Result<IndexStats, IndexerError> {
    let mut db = IndexerDb::open_with_config(config)?;
    index_all_conversations(&mut db, &config.projects_dir, full_reindex, |_, _, _, _| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    const USER_HELLO: &str = r#"{"type":"user","timestamp":"2026-01-05T10:00:00.000Z","cwd":"/Users/dev/my-app","message":{"role":"user","content":"hello"}}"#;
    const ASSISTANT_REPLY: &str = r#"{"type":"assistant","timestamp":"2026-01-05T10:00:05.000Z","message":{"role":"assistant","content":[{"type":"text","text":"hi there"},{"type":"tool_use","name":"Read","input":{"file_path":"/src/main.rs"}}]}}"#;
    const USER_BYE: &str = r#"{"type":"user","timestamp":"2026-01-05T10:01:00.000Z","message":{"role":"user","content":"bye"}}"#;
    const SUMMARY_RECORD: &str = r#"{"type":"summary","summary":"Greeting exchange"}"#;

    struct Fixture {
        _tmp: tempfile::TempDir,
        root: PathBuf,
        db: IndexerDb,
    }

    impl Fixture {
        fn new() -> Self {
            let tmp = tempfile::tempdir().unwrap();
            let root = tmp.path().join("projects");
            fs::create_dir_all(&root).unwrap();
            Self {
                _tmp: tmp,
                root,
                db: IndexerDb::open_in_memory().unwrap(),
            }
        }

        fn transcript(&self, project: &str, uuid: &str) -> PathBuf {
            let dir = self.root.join(project);
            fs::create_dir_all(&dir).unwrap();
            dir.join(format!("{}.jsonl", uuid))
        }

        fn run(&mut self, full_reindex: bool) -> IndexStats {
            index_all_conversations(&mut self.db, &self.root, full_reindex, |_, _, _, _| {})
                .unwrap()
        }

        fn count(&self, sql: &str) -> i64 {
            self.db
                .connection()
                .query_row(sql, [], |row| row.get(0))
                .unwrap()
        }

        fn fts_hits(&self, term: &str) -> i64 {
            self.db
                .connection()
                .query_row(
                    "SELECT COUNT(*) FROM messages_fts WHERE messages_fts MATCH ?1",
                    [term],
                    |row| row.get(0),
                )
                .unwrap()
        }
    }

    fn write_lines(path: &Path, lines: &[&str], mtime_secs: u64) {
        fs::write(path, lines.join("\n") + "\n").unwrap();
        set_mtime(path, mtime_secs);
    }

    fn append_lines(path: &Path, lines: &[&str], mtime_secs: u64) {
        let mut f = fs::OpenOptions::new().append(true).open(path).unwrap();
        f.write_all((lines.join("\n") + "\n").as_bytes()).unwrap();
        drop(f);
        set_mtime(path, mtime_secs);
    }

    /// Pin the modification time so fingerprint changes are deterministic
    fn set_mtime(path: &Path, secs: u64) {
        let f = fs::OpenOptions::new().write(true).open(path).unwrap();
        f.set_modified(UNIX_EPOCH + Duration::from_secs(secs))
            .unwrap();
    }

    fn state(line: usize, fingerprint: i64) -> IndexState {
        IndexState {
            last_indexed_line: line,
            fingerprint,
        }
    }

    #[test]
    fn test_decide_table() {
        assert_eq!(decide(None, 0, 1), Decision::Fresh);
        assert_eq!(decide(None, 10, 1), Decision::Fresh);
        assert_eq!(decide(Some(&state(5, 7)), 9, 7), Decision::NoChange);
        assert_eq!(decide(Some(&state(5, 7)), 3, 8), Decision::Rollback);
        assert_eq!(
            decide(Some(&state(5, 7)), 9, 8),
            Decision::Append { start: 5 }
        );
        // Same length, new fingerprint: the pass turns this into NoChange
        assert_eq!(
            decide(Some(&state(5, 7)), 5, 8),
            Decision::Append { start: 5 }
        );
    }

    #[test]
    fn test_read_lines_drops_blanks_and_trims() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("t.jsonl");
        fs::write(&path, b"  first  \n\n   \r\nsecond\r\n\xff third\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "first");
        assert_eq!(lines[1], "second");
        assert!(lines[2].ends_with("third"));
    }

    #[test]
    fn test_fresh_index() {
        let mut fx = Fixture::new();
        let path = fx.transcript("-Users-dev-my-app", "conv-1");
        write_lines(&path, &[USER_HELLO, ASSISTANT_REPLY, USER_BYE], 1_000);

        let stats = fx.run(false);
        assert_eq!(stats.conversations, 1);
        assert_eq!(stats.messages, 4);
        assert_eq!(stats.skipped, 0);
        assert_eq!(stats.failed, 0);

        let conv = fx.db.get_conversation("conv-1").unwrap().unwrap();
        assert_eq!(conv.message_count, 4);
        // cwd from the first record wins over the lossy decoded directory name
        assert_eq!(conv.project_path, "/Users/dev/my-app");
        assert_eq!(conv.encoded_path, "-Users-dev-my-app");
        assert_eq!(
            conversation_core::format_timestamp(&conv.created_at),
            "2026-01-05T10:00:00.000Z"
        );
        assert_eq!(conv.last_updated, fingerprint_time(1_000_000_000_000));

        let idx = fx.db.get_index_state("conv-1").unwrap().unwrap();
        assert_eq!(idx.last_indexed_line, 3);
        assert_eq!(
            idx.fingerprint,
            crate::discovery::mtime_nanos(UNIX_EPOCH + Duration::from_secs(1_000))
        );

        assert_eq!(fx.fts_hits("\"main.rs\""), 1);
        assert_eq!(
            fx.count("SELECT COUNT(*) FROM messages WHERE role = 'tool'"),
            1
        );
    }

    #[test]
    fn test_project_path_falls_back_to_directory() {
        let mut fx = Fixture::new();
        let path = fx.transcript("-Users-dev-other", "conv-1");
        write_lines(&path, &[USER_BYE], 1_000);

        fx.run(false);
        let conv = fx.db.get_conversation("conv-1").unwrap().unwrap();
        assert_eq!(conv.project_path, "/Users/dev/other");
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let mut fx = Fixture::new();
        let path = fx.transcript("-proj", "conv-1");
        write_lines(&path, &[USER_HELLO, ASSISTANT_REPLY], 1_000);

        fx.run(false);
        let stats = fx.run(false);
        assert_eq!(stats.conversations, 1);
        assert_eq!(stats.messages, 0);
        assert_eq!(stats.skipped, 1);
        assert_eq!(fx.count("SELECT COUNT(*) FROM messages"), 3);
        assert_eq!(
            fx.db.get_conversation("conv-1").unwrap().unwrap().message_count,
            3
        );
    }

    #[test]
    fn test_append_indexes_only_new_lines() {
        let mut fx = Fixture::new();
        let path = fx.transcript("-proj", "conv-1");
        write_lines(&path, &[USER_HELLO], 1_000);
        fx.run(false);

        append_lines(&path, &[ASSISTANT_REPLY, USER_BYE], 2_000);
        let stats = fx.run(false);
        assert_eq!(stats.messages, 3);
        assert_eq!(stats.skipped, 0);

        assert_eq!(fx.count("SELECT COUNT(*) FROM messages"), 4);
        assert_eq!(fx.fts_hits("hello"), 1);
        let conv = fx.db.get_conversation("conv-1").unwrap().unwrap();
        assert_eq!(conv.message_count, 4);
        assert_eq!(conv.last_updated, fingerprint_time(2_000_000_000_000));
        assert_eq!(
            fx.db.get_index_state("conv-1").unwrap().unwrap().last_indexed_line,
            3
        );
    }

    #[test]
    fn test_append_keeps_creation_metadata() {
        let mut fx = Fixture::new();
        let path = fx.transcript("-proj", "conv-1");
        write_lines(&path, &[USER_HELLO], 1_000);
        fx.run(false);
        let before = fx.db.get_conversation("conv-1").unwrap().unwrap();

        append_lines(&path, &[USER_BYE], 2_000);
        fx.run(false);
        let after = fx.db.get_conversation("conv-1").unwrap().unwrap();

        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.project_path, "/Users/dev/my-app");
    }

    #[test]
    fn test_touched_without_new_lines_is_unchanged() {
        let mut fx = Fixture::new();
        let path = fx.transcript("-proj", "conv-1");
        write_lines(&path, &[USER_HELLO], 1_000);
        fx.run(false);

        set_mtime(&path, 3_000);
        let stats = fx.run(false);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.messages, 0);

        // The watermark is left as it was
        let idx = fx.db.get_index_state("conv-1").unwrap().unwrap();
        assert_eq!(
            idx.fingerprint,
            crate::discovery::mtime_nanos(UNIX_EPOCH + Duration::from_secs(1_000))
        );
    }

    #[test]
    fn test_rollback_rebuilds_conversation() {
        let mut fx = Fixture::new();
        let path = fx.transcript("-proj", "conv-1");
        write_lines(&path, &[USER_HELLO, ASSISTANT_REPLY, USER_BYE], 1_000);
        fx.run(false);
        assert_eq!(fx.fts_hits("bye"), 1);

        let mut outcomes = Vec::new();
        write_lines(&path, &[USER_HELLO], 2_000);
        index_all_conversations(&mut fx.db, &fx.root, false, |_, _, _, outcome| {
            outcomes.push(outcome.clone())
        })
        .unwrap();

        assert_eq!(
            outcomes,
            vec![PassOutcome::Indexed {
                messages: 1,
                rolled_back: true
            }]
        );
        assert_eq!(fx.fts_hits("bye"), 0);
        assert_eq!(fx.fts_hits("hello"), 1);
        assert_eq!(fx.count("SELECT COUNT(*) FROM messages"), 1);
        assert_eq!(
            fx.db.get_conversation("conv-1").unwrap().unwrap().message_count,
            1
        );
        assert_eq!(
            fx.db.get_index_state("conv-1").unwrap().unwrap().last_indexed_line,
            1
        );
    }

    #[test]
    fn test_truncated_to_empty_purges() {
        let mut fx = Fixture::new();
        let path = fx.transcript("-proj", "conv-1");
        write_lines(&path, &[USER_HELLO], 1_000);
        fx.run(false);

        fs::write(&path, "").unwrap();
        set_mtime(&path, 2_000);
        fx.run(false);

        assert_eq!(fx.count("SELECT COUNT(*) FROM messages"), 0);
        assert!(fx.db.get_index_state("conv-1").unwrap().is_none());
    }

    #[test]
    fn test_empty_file_is_unchanged() {
        let mut fx = Fixture::new();
        let path = fx.transcript("-proj", "conv-1");
        fs::write(&path, "\n\n").unwrap();

        let stats = fx.run(false);
        assert_eq!(stats.skipped, 1);
        assert!(fx.db.get_conversation("conv-1").unwrap().is_none());
    }

    #[test]
    fn test_malformed_and_irrelevant_lines_are_skipped() {
        let mut fx = Fixture::new();
        let path = fx.transcript("-proj", "conv-1");
        write_lines(
            &path,
            &[USER_HELLO, "not json at all", SUMMARY_RECORD, "{\"type\":", USER_BYE],
            1_000,
        );

        let stats = fx.run(false);
        assert_eq!(stats.messages, 2);
        assert_eq!(stats.failed, 0);
        // Malformed lines still count towards the watermark
        assert_eq!(
            fx.db.get_index_state("conv-1").unwrap().unwrap().last_indexed_line,
            5
        );
    }

    #[test]
    fn test_full_reindex_rebuilds_everything() {
        let mut fx = Fixture::new();
        let path = fx.transcript("-proj", "conv-1");
        write_lines(&path, &[USER_HELLO, USER_BYE], 1_000);
        fx.run(false);

        let stats = fx.run(true);
        assert_eq!(stats.messages, 2);
        assert_eq!(stats.skipped, 0);
        assert_eq!(fx.count("SELECT COUNT(*) FROM messages"), 2);
        assert_eq!(
            fx.db.get_conversation("conv-1").unwrap().unwrap().message_count,
            2
        );
    }

    #[test]
    fn test_failure_is_contained_to_one_conversation() {
        let mut fx = Fixture::new();
        write_lines(&fx.transcript("-proj", "good"), &[USER_HELLO], 1_000);
        write_lines(
            &fx.transcript("-proj", "bad"),
            &[r#"{"type":"user","message":{"content":"poison"}}"#],
            1_000,
        );
        fx.db
            .connection()
            .execute_batch(
                "CREATE TRIGGER reject_poison BEFORE INSERT ON messages
                 WHEN new.content = 'poison' BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
            )
            .unwrap();

        let stats = fx.run(false);
        assert_eq!(stats.conversations, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.messages, 1);

        // Nothing of the failed pass was committed
        assert!(fx.db.get_conversation("bad").unwrap().is_none());
        assert!(fx.db.get_index_state("bad").unwrap().is_none());
        assert!(fx.db.get_conversation("good").unwrap().is_some());
    }

    #[test]
    fn test_last_indexed_failure_does_not_fail_run() {
        let mut fx = Fixture::new();
        write_lines(&fx.transcript("-proj", "conv-1"), &[USER_HELLO], 1_000);
        fx.db
            .connection()
            .execute_batch(
                "CREATE TRIGGER reject_stamp BEFORE INSERT ON metadata
                 WHEN new.key = 'last_indexed' BEGIN SELECT RAISE(ABORT, 'locked'); END;",
            )
            .unwrap();

        let stats = fx.run(false);
        assert_eq!(stats.conversations, 1);
        assert_eq!(stats.messages, 1);
        assert_eq!(stats.failed, 0);
        assert!(fx.db.get_conversation("conv-1").unwrap().is_some());
        assert_eq!(
            fx.count("SELECT COUNT(*) FROM metadata WHERE key = 'last_indexed'"),
            0
        );
    }

    #[test]
    fn test_progress_reports_every_file() {
        let mut fx = Fixture::new();
        write_lines(&fx.transcript("-a", "one"), &[USER_HELLO], 1_000);
        write_lines(&fx.transcript("-b", "two"), &[USER_BYE], 1_000);

        let mut seen = Vec::new();
        index_all_conversations(&mut fx.db, &fx.root, false, |current, total, file, _| {
            seen.push((current, total, file.uuid.clone()))
        })
        .unwrap();

        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, 1);
        assert_eq!(seen[1].0, 2);
        assert!(seen.iter().all(|(_, total, _)| *total == 2));
    }

    #[test]
    fn test_missing_root_aborts_run() {
        let mut fx = Fixture::new();
        let missing = fx.root.join("absent");
        let result = index_all_conversations(&mut fx.db, &missing, false, |_, _, _, _| {});
        assert!(matches!(result, Err(IndexerError::RootNotFound(_))));
    }

    #[test]
    fn test_run_index_stamps_last_indexed() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::from_home(tmp.path());
        let project = config.projects_dir.join("-proj");
        fs::create_dir_all(&project).unwrap();
        write_lines(&project.join("conv-1.jsonl"), &[USER_HELLO], 1_000);

        let before = SystemTime::now();
        let stats = run_index(&config, false).unwrap();
        assert_eq!(stats.messages, 1);

        let db = IndexerDb::open_with_config(&config).unwrap();
        let stamped: String = db
            .connection()
            .query_row(
                "SELECT value FROM metadata WHERE key = 'last_indexed'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        let stamped = conversation_core::parse_timestamp(&stamped).unwrap();
        let before: DateTime<Utc> = before.into();
        assert!(stamped >= before - chrono::Duration::seconds(1));
    }
}
