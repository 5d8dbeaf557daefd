use super::db::Db;
use crate::libs::budget::Budget;
use crate::libs::messages::Message;
use anyhow::Result;

pub const NAMESPACE: &str = "budgets";

/// Typed accessor for the budget collection namespace.
pub struct Budgets;

impl Budgets {
    pub fn load(db: &Db) -> Result<Vec<Budget>> {
        match db.load_raw(NAMESPACE)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(budgets) => Ok(budgets),
                Err(err) => {
                    tracing::warn!("{}", Message::StoreLoadFailed(NAMESPACE.into(), err.to_string()));
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    pub fn save(db: &Db, budgets: &[Budget]) -> Result<()> {
        db.save_raw(NAMESPACE, &serde_json::to_string(budgets)?)
    }
}
