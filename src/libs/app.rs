//! Application state container and domain operations.
//!
//! [`App`] owns the in-memory copy of the four collections, the transient
//! UI state (current screen, task filter, pending undo) and the handle to
//! the durable store. It is an explicit instance rather than a global, so
//! tests run any number of independent apps against temporary stores.
//!
//! Every mutating operation follows the same shape: validate, mutate the
//! in-memory collection, write the collection through to the store, emit
//! an analytics event. The in-memory copy is the single source of truth
//! for the session; a failed write-through is logged and the session
//! continues on the in-memory state. Operations on ids that no longer
//! exist are silent no-ops — the UI may race a just-deleted entity and
//! that is not an error.

use crate::db::budgets::Budgets;
use crate::db::db::Db;
use crate::db::habits::Habits;
use crate::db::notes::Notes;
use crate::db::seed;
use crate::db::settings::Settings;
use crate::db::tasks::Tasks;
use crate::libs::budget::{Budget, BudgetItem, Transaction};
use crate::libs::dates::{now_ms, today_key, yesterday_key};
use crate::libs::events;
use crate::libs::export::ExportDocument;
use crate::libs::habit::{Habit, HABIT_TEMPLATES};
use crate::libs::ids::new_id;
use crate::libs::messages::Message;
use crate::libs::note::Note;
use crate::libs::projection::{self, ScreenView};
use crate::libs::screen::Screen;
use crate::libs::task::{Priority, Subtask, SubtaskDraft, Task, TaskDraft, TaskFilter};
use crate::libs::undo::{UndoAction, UndoSlot};
use crate::msg_bail_anyhow;
use anyhow::Result;

/// Every Nth visit earns a celebration.
pub const VISIT_MILESTONE: i64 = 10;

/// Outcome of toggling a habit, consumed by the presentation layer to
/// fire each cosmetic signal exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HabitToggle {
    pub now_done: bool,
    pub streak: u32,
    /// True when this toggle made today complete across every habit.
    pub all_done_today: bool,
}

pub struct App {
    db: Db,
    pub tasks: Vec<Task>,
    pub habits: Vec<Habit>,
    pub budgets: Vec<Budget>,
    pub notes: Vec<Note>,
    pub screen: Screen,
    pub task_filter: TaskFilter,
    pub visit_count: i64,
    undo: UndoSlot,
}

impl App {
    /// Opens the default store, seeds demo content on first run, loads
    /// the collections and bumps the visit counter.
    pub fn init() -> Result<Self> {
        let db = Db::new()?;
        seed::ensure_demo_data(&db)?;
        crate::libs::messages::i18n::init(Settings::language(&db));
        let mut app = Self::with_db(db)?;
        app.visit_count = Settings::bump_visit_counter(&app.db)?;
        Ok(app)
    }

    /// Loads an app over an already-open store without seeding or visit
    /// accounting. This is the entry point tests use.
    pub fn with_db(db: Db) -> Result<Self> {
        let tasks = Tasks::load(&db)?;
        let habits = Habits::load(&db)?;
        let budgets = Budgets::load(&db)?;
        let notes = Notes::load(&db)?;
        Ok(Self {
            db,
            tasks,
            habits,
            budgets,
            notes,
            screen: Screen::default(),
            task_filter: TaskFilter::default(),
            visit_count: 0,
            undo: UndoSlot::new(),
        })
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    /// Whether the current visit count lands on a celebration milestone.
    pub fn visit_milestone(&self) -> bool {
        self.visit_count > 0 && self.visit_count % VISIT_MILESTONE == 0
    }

    // === NAVIGATION ===

    /// Switches the active screen and re-derives its projection from the
    /// in-memory collections.
    pub fn navigate_to(&mut self, screen: Screen) -> ScreenView {
        self.screen = screen;
        events::emit("screen_view", &[("screen", screen.label())]);
        self.project()
    }

    pub fn set_task_filter(&mut self, filter: TaskFilter) {
        self.task_filter = filter;
    }

    /// Projection of the currently active screen.
    pub fn project(&self) -> ScreenView {
        match self.screen {
            Screen::Home => ScreenView::Home(projection::home_view(&self.tasks, &self.habits, &self.budgets, &self.notes)),
            Screen::Tasks => ScreenView::Tasks(projection::task_list_view(&self.tasks, self.task_filter)),
            Screen::Habits => ScreenView::Habits(projection::habits_view(&self.habits)),
            Screen::Budgets => ScreenView::Budgets(projection::budgets_view(&self.budgets)),
            Screen::Notes => ScreenView::Notes(projection::notes_view(&self.notes, None)),
        }
    }

    // === TASK OPERATIONS ===

    /// Creates a task from the draft. The title is the one hard
    /// requirement; everything else defaults to empty.
    pub fn create_task(&mut self, draft: TaskDraft) -> Result<&Task> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            msg_bail_anyhow!(Message::TaskTitleRequired);
        }
        let task = Task {
            id: new_id(),
            title,
            description: draft.description,
            due_date: draft.due_date,
            priority: draft.priority.unwrap_or(Priority::Medium),
            tags: draft.tags,
            subtasks: reconcile_subtasks(&[], draft.subtasks),
            done: false,
            order: self.tasks.len() as i64 + 1,
        };
        self.tasks.push(task);
        self.persist_tasks();
        let task = self.tasks.last().expect("just pushed");
        events::emit("task_create", &[("task_id", &task.id), ("task_title", &task.title)]);
        Ok(task)
    }

    /// Overwrites an existing task's fields, reconciling subtasks by id
    /// so completion flags survive an edit. Unknown ids are a no-op.
    pub fn update_task(&mut self, id: &str, draft: TaskDraft) -> Result<bool> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            msg_bail_anyhow!(Message::TaskTitleRequired);
        }
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.title = title;
        task.description = draft.description;
        task.due_date = draft.due_date;
        if let Some(priority) = draft.priority {
            task.priority = priority;
        }
        task.tags = draft.tags;
        task.subtasks = reconcile_subtasks(&task.subtasks, draft.subtasks);
        let task_id = task.id.clone();
        self.persist_tasks();
        events::emit("task_update", &[("task_id", &task_id)]);
        Ok(true)
    }

    /// Flips a task's completion, returning the new state.
    pub fn toggle_task(&mut self, id: &str) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.done = !task.done;
        let done = task.done;
        let task_id = task.id.clone();
        self.persist_tasks();
        events::emit(
            "task_toggle",
            &[("task_id", &task_id), ("status", if done { "completed" } else { "reopened" })],
        );
        Some(done)
    }

    /// Flips a subtask's completion; the parent task is untouched.
    pub fn toggle_subtask(&mut self, task_id: &str, subtask_id: &str) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == task_id)?;
        let subtask = task.subtasks.iter_mut().find(|st| st.id == subtask_id)?;
        subtask.done = !subtask.done;
        let done = subtask.done;
        self.persist_tasks();
        Some(done)
    }

    /// Removes a task and arms the undo slot with it.
    pub fn delete_task(&mut self, id: &str) -> Option<String> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(index);
        self.persist_tasks();
        events::emit("task_delete", &[("task_id", &task.id), ("task_title", &task.title)]);
        let title = task.title.clone();
        self.undo.arm(UndoAction::Task { index, task });
        Some(title)
    }

    // === HABIT OPERATIONS ===

    pub fn create_habit(&mut self, title: &str, description: &str) -> Result<&Habit> {
        let title = title.trim();
        if title.is_empty() {
            msg_bail_anyhow!(Message::HabitTitleRequired);
        }
        let habit = self.push_habit(title, description, "#00ff88");
        events::emit("habit_create_custom", &[("habit_id", &habit.id), ("habit_title", &habit.title)]);
        Ok(habit)
    }

    /// Creates a habit from the built-in template catalog.
    pub fn create_habit_from_template(&mut self, template_index: usize) -> Result<&Habit> {
        let Some(template) = HABIT_TEMPLATES.get(template_index) else {
            msg_bail_anyhow!(Message::HabitTemplateUnknown(template_index));
        };
        let habit = self.push_habit(template.title, template.description, template.color);
        let index = template_index.to_string();
        events::emit(
            "habit_create_template",
            &[("habit_id", &habit.id), ("habit_title", &habit.title), ("template_index", &index)],
        );
        Ok(habit)
    }

    fn push_habit(&mut self, title: &str, description: &str, color: &str) -> &Habit {
        self.habits.push(Habit {
            id: new_id(),
            title: title.to_string(),
            description: description.to_string(),
            schedule: "daily".to_string(),
            daily_records: Default::default(),
            streak: 0,
            color: color.to_string(),
        });
        self.persist_habits();
        self.habits.last().expect("just pushed")
    }

    /// Flips today's record for a habit and maintains its streak.
    ///
    /// Marking done extends the streak when yesterday was done or no
    /// streak existed, and otherwise restarts it at 1 — today's own
    /// completion counts. Unmarking steps the streak back down, never
    /// below zero.
    pub fn toggle_habit(&mut self, id: &str) -> Option<HabitToggle> {
        let today = today_key();
        let yesterday = yesterday_key();

        let habit = self.habits.iter_mut().find(|h| h.id == id)?;
        let was_done = habit.done_on(&today);
        habit.daily_records.insert(today.clone(), !was_done);

        if !was_done {
            if habit.done_on(&yesterday) || habit.streak == 0 {
                habit.streak += 1;
            } else {
                habit.streak = 1;
            }
        } else {
            habit.streak = habit.streak.saturating_sub(1);
        }

        let outcome = HabitToggle {
            now_done: !was_done,
            streak: habit.streak,
            all_done_today: false,
        };
        let habit_id = habit.id.clone();
        let habit_title = habit.title.clone();
        self.persist_habits();
        events::emit(
            "habit_toggle",
            &[
                ("habit_id", &habit_id),
                ("habit_title", &habit_title),
                ("status", if outcome.now_done { "completed" } else { "unchecked" }),
            ],
        );

        let all_done_today = outcome.now_done && !self.habits.is_empty() && self.habits.iter().all(|h| h.done_on(&today));
        Some(HabitToggle { all_done_today, ..outcome })
    }

    pub fn delete_habit(&mut self, id: &str) -> Option<String> {
        let index = self.habits.iter().position(|h| h.id == id)?;
        let habit = self.habits.remove(index);
        self.persist_habits();
        events::emit("habit_delete", &[("habit_id", &habit.id), ("habit_title", &habit.title)]);
        let title = habit.title.clone();
        self.undo.arm(UndoAction::Habit { index, habit });
        Some(title)
    }

    // === BUDGET OPERATIONS ===

    pub fn create_budget(&mut self, name: &str, currency: &str) -> Result<&Budget> {
        let name = name.trim();
        if name.is_empty() {
            msg_bail_anyhow!(Message::BudgetNameRequired);
        }
        self.budgets.push(Budget {
            id: new_id(),
            name: name.to_string(),
            currency: currency.to_string(),
            items: Vec::new(),
            transactions: Vec::new(),
        });
        self.persist_budgets();
        let budget = self.budgets.last().expect("just pushed");
        events::emit("budget_create", &[("budget_id", &budget.id), ("budget_name", &budget.name)]);
        Ok(budget)
    }

    /// Adds an allocation line to a budget; dated today.
    pub fn add_budget_item(&mut self, budget_id: &str, title: &str, amount: f64, notes: &str) -> Option<()> {
        let date = today_key();
        let budget = self.budgets.iter_mut().find(|b| b.id == budget_id)?;
        budget.items.push(BudgetItem {
            id: new_id(),
            title: title.to_string(),
            amount,
            date,
            notes: notes.to_string(),
        });
        let budget_id = budget.id.clone();
        self.persist_budgets();
        events::emit("budget_item_add", &[("budget_id", &budget_id)]);
        Some(())
    }

    pub fn delete_budget_item(&mut self, budget_id: &str, item_id: &str) -> Option<String> {
        let budget = self.budgets.iter_mut().find(|b| b.id == budget_id)?;
        let index = budget.items.iter().position(|item| item.id == item_id)?;
        let item = budget.items.remove(index);
        let budget_id = budget.id.clone();
        self.persist_budgets();
        let title = item.title.clone();
        self.undo.arm(UndoAction::BudgetItem { budget_id, index, item });
        Some(title)
    }

    /// Records a transaction against a budget; negative amounts are
    /// expenses. The item link stays unset.
    pub fn add_transaction(&mut self, budget_id: &str, description: &str, amount: f64) -> Option<()> {
        let date = today_key();
        let budget = self.budgets.iter_mut().find(|b| b.id == budget_id)?;
        budget.transactions.push(Transaction {
            id: new_id(),
            item_id: None,
            amount,
            description: description.to_string(),
            date,
        });
        let budget_id = budget.id.clone();
        self.persist_budgets();
        events::emit("transaction_add", &[("budget_id", &budget_id)]);
        Some(())
    }

    /// Removes a whole budget. Destructive: confirmation happens at the
    /// boundary and no undo is armed.
    pub fn delete_budget(&mut self, budget_id: &str) -> bool {
        let Some(index) = self.budgets.iter().position(|b| b.id == budget_id) else {
            return false;
        };
        let budget = self.budgets.remove(index);
        self.persist_budgets();
        events::emit("budget_delete", &[("budget_id", &budget.id), ("budget_name", &budget.name)]);
        true
    }

    // === NOTE OPERATIONS ===

    pub fn create_note(&mut self, title: &str, body_markdown: &str, tags: Vec<String>) -> Result<&Note> {
        let title = title.trim();
        if title.is_empty() {
            msg_bail_anyhow!(Message::NoteTitleRequired);
        }
        self.notes.push(Note {
            id: new_id(),
            title: title.to_string(),
            body_markdown: body_markdown.to_string(),
            tags,
            updated_at: now_ms(),
        });
        self.persist_notes();
        let note = self.notes.last().expect("just pushed");
        events::emit("note_create", &[("note_id", &note.id), ("note_title", &note.title)]);
        Ok(note)
    }

    /// Overwrites a note and refreshes its modification timestamp.
    pub fn update_note(&mut self, id: &str, title: &str, body_markdown: &str, tags: Vec<String>) -> Result<bool> {
        let title = title.trim();
        if title.is_empty() {
            msg_bail_anyhow!(Message::NoteTitleRequired);
        }
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return Ok(false);
        };
        note.title = title.to_string();
        note.body_markdown = body_markdown.to_string();
        note.tags = tags;
        note.updated_at = now_ms();
        let note_id = note.id.clone();
        self.persist_notes();
        events::emit("note_update", &[("note_id", &note_id)]);
        Ok(true)
    }

    pub fn delete_note(&mut self, id: &str) -> Option<String> {
        let index = self.notes.iter().position(|n| n.id == id)?;
        let note = self.notes.remove(index);
        self.persist_notes();
        events::emit("note_delete", &[("note_id", &note.id), ("note_title", &note.title)]);
        let title = note.title.clone();
        self.undo.arm(UndoAction::Note { index, note });
        Some(title)
    }

    // === UNDO ===

    /// Applies the pending reversal if one is armed and unexpired,
    /// restoring the deleted entity at its original index. Returns the
    /// restored entity's title.
    pub fn undo(&mut self) -> Option<String> {
        match self.undo.take()? {
            UndoAction::Task { index, task } => {
                let title = task.title.clone();
                let index = index.min(self.tasks.len());
                self.tasks.insert(index, task);
                self.persist_tasks();
                Some(title)
            }
            UndoAction::Habit { index, habit } => {
                let title = habit.title.clone();
                let index = index.min(self.habits.len());
                self.habits.insert(index, habit);
                self.persist_habits();
                Some(title)
            }
            UndoAction::Note { index, note } => {
                let title = note.title.clone();
                let index = index.min(self.notes.len());
                self.notes.insert(index, note);
                self.persist_notes();
                Some(title)
            }
            UndoAction::BudgetItem { budget_id, index, item } => {
                let budget = self.budgets.iter_mut().find(|b| b.id == budget_id)?;
                let title = item.title.clone();
                let index = index.min(budget.items.len());
                budget.items.insert(index, item);
                self.persist_budgets();
                Some(title)
            }
        }
    }

    /// Direct access to the undo slot, for arming with a custom window.
    pub fn undo_slot_mut(&mut self) -> &mut UndoSlot {
        &mut self.undo
    }

    // === BULK COLLECTION OPERATIONS ===

    /// Snapshot of all four collections for export.
    pub fn export_document(&self) -> ExportDocument {
        ExportDocument {
            budgets: self.budgets.clone(),
            tasks: self.tasks.clone(),
            notes: self.notes.clone(),
            habits: self.habits.clone(),
        }
    }

    /// Replaces all four collections in memory and in the store. The
    /// caller validates the document first; by this point the swap
    /// cannot partially fail in memory.
    pub fn replace_collections(&mut self, doc: ExportDocument) {
        self.budgets = doc.budgets;
        self.tasks = doc.tasks;
        self.notes = doc.notes;
        self.habits = doc.habits;
        self.persist_budgets();
        self.persist_tasks();
        self.persist_notes();
        self.persist_habits();
        events::emit("data_import", &[]);
    }

    /// Replaces everything with freshly generated demo content.
    pub fn reset_to_demo(&mut self) {
        self.replace_collections(ExportDocument {
            budgets: seed::demo_budgets(),
            tasks: seed::demo_tasks(),
            notes: seed::demo_notes(),
            habits: seed::demo_habits(),
        });
    }

    /// Empties every collection, in memory and in the store.
    pub fn clear_all_data(&mut self) {
        self.replace_collections(ExportDocument {
            budgets: Vec::new(),
            tasks: Vec::new(),
            notes: Vec::new(),
            habits: Vec::new(),
        });
    }

    // === WRITE-THROUGH ===

    fn persist_tasks(&self) {
        if let Err(err) = Tasks::save(&self.db, &self.tasks) {
            tracing::warn!("{}", Message::StoreSaveFailed(crate::db::tasks::NAMESPACE.into(), err.to_string()));
        }
    }

    fn persist_habits(&self) {
        if let Err(err) = Habits::save(&self.db, &self.habits) {
            tracing::warn!("{}", Message::StoreSaveFailed(crate::db::habits::NAMESPACE.into(), err.to_string()));
        }
    }

    fn persist_budgets(&self) {
        if let Err(err) = Budgets::save(&self.db, &self.budgets) {
            tracing::warn!("{}", Message::StoreSaveFailed(crate::db::budgets::NAMESPACE.into(), err.to_string()));
        }
    }

    fn persist_notes(&self) {
        if let Err(err) = Notes::save(&self.db, &self.notes) {
            tracing::warn!("{}", Message::StoreSaveFailed(crate::db::notes::NAMESPACE.into(), err.to_string()));
        }
    }
}

/// Matches submitted subtasks against existing ones: entries with a known
/// id keep their completion flag, new entries get fresh ids, and entries
/// whose trimmed text is empty are dropped.
fn reconcile_subtasks(existing: &[Subtask], drafts: Vec<SubtaskDraft>) -> Vec<Subtask> {
    drafts
        .into_iter()
        .filter(|draft| !draft.text.trim().is_empty())
        .map(|draft| {
            let done = draft
                .id
                .as_ref()
                .and_then(|id| existing.iter().find(|st| &st.id == id))
                .map(|st| st.done)
                .unwrap_or(false);
            Subtask {
                id: draft.id.unwrap_or_else(new_id),
                text: draft.text,
                done,
            }
        })
        .collect()
}
