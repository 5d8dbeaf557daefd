//! Single-slot undo for destructive operations.
//!
//! At most one reversal is pending at a time: arming a new one silently
//! discards the previous, and a pending reversal expires once its window
//! elapses. Expiry is checked when the undo is invoked.

use crate::libs::budget::BudgetItem;
use crate::libs::habit::Habit;
use crate::libs::note::Note;
use crate::libs::task::Task;
use std::time::{Duration, Instant};

pub const UNDO_WINDOW: Duration = Duration::from_secs(5);

/// A deleted entity together with the index it was removed from.
#[derive(Debug, Clone)]
pub enum UndoAction {
    Task { index: usize, task: Task },
    Habit { index: usize, habit: Habit },
    Note { index: usize, note: Note },
    BudgetItem { budget_id: String, index: usize, item: BudgetItem },
}

impl UndoAction {
    /// Title of the deleted entity, for the "Deleted …" notice.
    pub fn title(&self) -> &str {
        match self {
            UndoAction::Task { task, .. } => &task.title,
            UndoAction::Habit { habit, .. } => &habit.title,
            UndoAction::Note { note, .. } => &note.title,
            UndoAction::BudgetItem { item, .. } => &item.title,
        }
    }
}

#[derive(Debug, Default)]
pub struct UndoSlot {
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    action: UndoAction,
    armed_at: Instant,
    window: Duration,
}

impl UndoSlot {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Arms a reversal with the default 5-second window, discarding any
    /// previously pending one.
    pub fn arm(&mut self, action: UndoAction) {
        self.arm_with_window(action, UNDO_WINDOW);
    }

    pub fn arm_with_window(&mut self, action: UndoAction, window: Duration) {
        self.pending = Some(Pending { action, armed_at: Instant::now(), window });
    }

    /// Takes the pending reversal if one is armed and unexpired. The slot
    /// is cleared either way, so a second take is a no-op.
    pub fn take(&mut self) -> Option<UndoAction> {
        let pending = self.pending.take()?;
        if pending.armed_at.elapsed() > pending.window {
            return None;
        }
        Some(pending.action)
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}
