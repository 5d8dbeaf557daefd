use super::db::Db;
use crate::libs::note::Note;
use crate::libs::messages::Message;
use anyhow::Result;

pub const NAMESPACE: &str = "notes";

/// Typed accessor for the note collection namespace.
pub struct Notes;

impl Notes {
    pub fn load(db: &Db) -> Result<Vec<Note>> {
        match db.load_raw(NAMESPACE)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(notes) => Ok(notes),
                Err(err) => {
                    tracing::warn!("{}", Message::StoreLoadFailed(NAMESPACE.into(), err.to_string()));
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    pub fn save(db: &Db, notes: &[Note]) -> Result<()> {
        db.save_raw(NAMESPACE, &serde_json::to_string(notes)?)
    }
}
