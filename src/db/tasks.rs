use super::db::Db;
use crate::libs::task::Task;
use crate::libs::messages::Message;
use anyhow::Result;

pub const NAMESPACE: &str = "tasks";

/// Typed accessor for the task collection namespace.
pub struct Tasks;

impl Tasks {
    /// Loads the collection; an unwritten namespace yields an empty list,
    /// an undecodable one is reported and replaced by an empty list.
    pub fn load(db: &Db) -> Result<Vec<Task>> {
        match db.load_raw(NAMESPACE)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(tasks) => Ok(tasks),
                Err(err) => {
                    tracing::warn!("{}", Message::StoreLoadFailed(NAMESPACE.into(), err.to_string()));
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    /// Serializes and writes the whole collection, preserving order.
    pub fn save(db: &Db, tasks: &[Task]) -> Result<()> {
        db.save_raw(NAMESPACE, &serde_json::to_string(tasks)?)
    }
}
