use super::db::Db;
use crate::libs::habit::Habit;
use crate::libs::messages::Message;
use anyhow::Result;

pub const NAMESPACE: &str = "habits";

/// Typed accessor for the habit collection namespace.
pub struct Habits;

impl Habits {
    pub fn load(db: &Db) -> Result<Vec<Habit>> {
        match db.load_raw(NAMESPACE)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(habits) => Ok(habits),
                Err(err) => {
                    tracing::warn!("{}", Message::StoreLoadFailed(NAMESPACE.into(), err.to_string()));
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    pub fn save(db: &Db, habits: &[Habit]) -> Result<()> {
        db.save_raw(NAMESPACE, &serde_json::to_string(habits)?)
    }
}
