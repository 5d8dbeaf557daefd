//! Backup document handling.
//!
//! A backup is one JSON document holding all four collections. Import is
//! all-or-nothing: the document is fully validated before any collection
//! is touched, so a malformed file leaves both memory and storage
//! unchanged.

use crate::libs::budget::Budget;
use crate::libs::habit::Habit;
use crate::libs::note::Note;
use crate::libs::task::Task;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Collections a backup must carry; a document missing any is rejected.
pub const REQUIRED_COLLECTIONS: [&str; 4] = ["budgets", "tasks", "notes", "habits"];

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("not a valid JSON document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("missing collection '{0}'")]
    MissingCollection(&'static str),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub budgets: Vec<Budget>,
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
    pub habits: Vec<Habit>,
}

impl ExportDocument {
    /// Parses and validates a backup document. Every required collection
    /// key must be present, even when empty.
    pub fn parse(raw: &str) -> Result<Self, ImportError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        for key in REQUIRED_COLLECTIONS {
            if value.get(key).is_none() {
                return Err(ImportError::MissingCollection(key));
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Timestamped default file name for an exported backup.
pub fn backup_file_name(now_ms: i64) -> String {
    format!("productivity-backup-{}.json", now_ms)
}
