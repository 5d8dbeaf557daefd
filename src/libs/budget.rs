//! Budget domain types and their derived figures.
//!
//! `spent`, `total`, `remaining` and `percent_used` are derived on demand
//! and never stored; `remaining = Σ items.amount − Σ |transactions.amount|`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: String,
    pub title: String,
    /// Budgeted allocation; never negative.
    pub amount: f64,
    pub date: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Optional link to a budget item. Persisted for future use; no
    /// aggregate consumes it and no referential integrity is enforced.
    pub item_id: Option<String>,
    /// Signed amount: negative for expenses, positive for income.
    pub amount: f64,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub name: String,
    pub currency: String,
    pub items: Vec<BudgetItem>,
    pub transactions: Vec<Transaction>,
}

impl Budget {
    /// Sum of budgeted allocations.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Sum of absolute transaction amounts, regardless of item linkage.
    pub fn spent(&self) -> f64 {
        self.transactions.iter().map(|t| t.amount.abs()).sum()
    }

    pub fn remaining(&self) -> f64 {
        self.total() - self.spent()
    }

    /// Share of the allocation consumed, as a percentage. Zero when
    /// nothing is budgeted.
    pub fn percent_used(&self) -> f64 {
        let total = self.total();
        if total > 0.0 {
            self.spent() / total * 100.0
        } else {
            0.0
        }
    }
}
