//! Transcript file discovery under the projects directory

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use conversation_core::{decode_project_path, ConversationFile};

use crate::connection::IndexerError;

/// Transcript file extension
pub const TRANSCRIPT_EXTENSION: &str = "jsonl";

/// Enumerates `<root>/<encoded-project>/<uuid>.jsonl`
#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    pub fn new(projects_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: projects_dir.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List every transcript under the root
    ///
    /// Only a missing root is an error. A project directory that cannot be
    /// read contributes no files. The result is in no particular order.
    pub fn scan(&self) -> Result<Vec<ConversationFile>, IndexerError> {
        if !self.root.exists() {
            return Err(IndexerError::RootNotFound(self.root.clone()));
        }

        let mut files = Vec::new();
        for entry in immediate_children(&self.root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(error = %e, "Skipping unreadable projects entry");
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }

            match scan_project(entry.path()) {
                Ok(mut project_files) => files.append(&mut project_files),
                Err(e) => {
                    debug!(project = %entry.path().display(), error = %e, "Skipping unreadable project");
                }
            }
        }

        Ok(files)
    }
}

fn immediate_children(dir: &Path) -> walkdir::IntoIter {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
}

/// All transcripts of one project, or an error if the directory listing fails
fn scan_project(project_dir: &Path) -> Result<Vec<ConversationFile>, walkdir::Error> {
    let encoded_path = project_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let project_path = decode_project_path(&encoded_path);

    let entries = immediate_children(project_dir).collect::<Result<Vec<DirEntry>, _>>()?;

    let files = entries
        .into_iter()
        .filter(|entry| entry.file_type().is_file() && is_transcript(entry.path()))
        .filter_map(|entry| {
            let uuid = entry.path().file_stem()?.to_string_lossy().into_owned();
            let last_modified = entry
                .metadata()
                .ok()
                .and_then(|m| m.modified().ok())
                .map(mtime_nanos)
                .unwrap_or(0);

            Some(ConversationFile {
                uuid,
                file_path: entry.into_path(),
                project_path: project_path.clone(),
                encoded_path: encoded_path.clone(),
                last_modified,
            })
        })
        .collect();

    Ok(files)
}

fn is_transcript(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(TRANSCRIPT_EXTENSION)
}

/// Modification time as nanoseconds since the Unix epoch
pub fn mtime_nanos(modified: SystemTime) -> i64 {
    modified
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as i64)
        .unwrap_or(0)
}
