//! Note domain type.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    /// Raw markdown body; rendering is a consumer concern.
    pub body_markdown: String,
    pub tags: Vec<String>,
    /// Millisecond timestamp, refreshed on every edit.
    pub updated_at: i64,
}

impl Note {
    /// Case-insensitive substring match against title, body, or any tag.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.body_markdown.to_lowercase().contains(&query)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
    }
}
