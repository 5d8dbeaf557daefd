//! Task domain types.
//!
//! Tasks carry an opaque string id, a manual sort `order`, optional
//! subtasks, and a priority used by list sorting and MIT selection.
//! Field names serialize in camelCase to match the persisted layout.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn is_high(&self) -> bool {
        matches!(self, Priority::High)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: String,
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Due date key (`YYYY-MM-DD`) or empty when the task has no due date.
    pub due_date: String,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub subtasks: Vec<Subtask>,
    pub done: bool,
    /// Manual sort position; ascending tie-breaker within a listing.
    pub order: i64,
}

/// Fields accepted by the create and update operations.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: Option<Priority>,
    pub tags: Vec<String>,
    pub subtasks: Vec<SubtaskDraft>,
}

/// A subtask as submitted by an edit form: entries with a known id keep
/// their completion flag, entries without one become new subtasks.
#[derive(Debug, Clone, Default)]
pub struct SubtaskDraft {
    pub id: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TaskFilter {
    #[default]
    All,
    Today,
    High,
    Completed,
}

/// Splits a comma-separated tag field into trimmed, non-empty tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|t| t.trim().to_string()).filter(|t| !t.is_empty()).collect()
}
