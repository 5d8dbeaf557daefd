//! Display implementation converting structured messages into the
//! human-readable text shown in the terminal. All user-facing English
//! message text lives here; translated UI labels come from the locale
//! bundles in [`super::i18n`].

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // Task messages
            Message::TaskCreated => "Task created! 📝".to_string(),
            Message::TaskUpdated => "Task updated! ✓".to_string(),
            Message::TaskCompleted => "Task completed! 🎉".to_string(),
            Message::TaskReopened => "Task reopened".to_string(),
            Message::TaskNotFound => "Task not found".to_string(),
            Message::TaskTitleRequired => "Task title must not be empty".to_string(),
            Message::TasksHeader => "📋 Tasks".to_string(),
            Message::NoTasksFound => "No tasks found. Create your first task! ✓".to_string(),
            Message::SubtaskNotFound => "Subtask not found".to_string(),

            // Habit messages
            Message::HabitCreated => "Habit added! 🎯".to_string(),
            Message::HabitChecked => "Habit completed! 🎉".to_string(),
            Message::HabitUnchecked => "Habit unchecked".to_string(),
            Message::HabitNotFound => "Habit not found".to_string(),
            Message::HabitTitleRequired => "Habit title must not be empty".to_string(),
            Message::HabitTemplateUnknown(index) => format!("No habit template with index {}", index),
            Message::HabitsHeader => "🔥 Habits".to_string(),
            Message::NoHabitsFound => "No habits yet. Add habits to start tracking! 🎯".to_string(),
            Message::AllHabitsDoneToday => "All habits completed today! 🎊".to_string(),

            // Budget messages
            Message::BudgetCreated => "Budget created successfully! 💰".to_string(),
            Message::BudgetDeleted => "Budget deleted".to_string(),
            Message::BudgetNotFound => "Budget not found".to_string(),
            Message::BudgetNameRequired => "Budget name must not be empty".to_string(),
            Message::BudgetItemAdded => "Budget item added! 📝".to_string(),
            Message::BudgetItemNotFound => "Budget item not found".to_string(),
            Message::TransactionAdded => "Transaction added! 💸".to_string(),
            Message::BudgetsHeader => "💰 Budgets".to_string(),
            Message::NoBudgetsFound => "No budgets yet. Create your first budget to get started! 💰".to_string(),
            Message::ConfirmDeleteBudget(name) => {
                format!("Delete budget '{}'? This action cannot be undone", name)
            }

            // Note messages
            Message::NoteCreated => "Note created! 📝".to_string(),
            Message::NoteUpdated => "Note updated! ✓".to_string(),
            Message::NoteNotFound => "Note not found".to_string(),
            Message::NoteTitleRequired => "Note title must not be empty".to_string(),
            Message::NotesHeader => "📝 Notes".to_string(),
            Message::NoNotesFound => "No notes yet. Start writing! 📝".to_string(),

            // Undo messages
            Message::Deleted(title) => format!("Deleted \"{}\"", title),
            Message::PromptUndo => "Undo? (valid for 5 seconds)".to_string(),
            Message::UndoApplied(title) => format!("Restored \"{}\"", title),
            Message::NothingToUndo => "Nothing to undo".to_string(),

            // Settings messages
            Message::SettingsSaved => "Settings saved".to_string(),
            Message::ThemeSet(theme) => format!("Theme set to {}", theme),
            Message::LanguageSet(lang) => format!("Language set to {}", lang),
            Message::VisitMilestone(count) => format!("Visit #{} — thanks for coming back! 🎊", count),

            // Backup messages
            Message::DataExported(path) => format!("Data exported successfully to: {} 📥", path),
            Message::DataImported => "Data imported successfully! 📤".to_string(),
            Message::ImportFailed(reason) => format!("Failed to import data: {}", reason),
            Message::ConfirmResetToDemo => "This will replace all your current data with demo data. Are you sure?".to_string(),
            Message::ConfirmClearAllData => "This will permanently delete all your data. Are you sure?".to_string(),
            Message::DemoDataRestored => "Demo data restored! 🔄".to_string(),
            Message::AllDataCleared => "All data cleared".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // Home messages
            Message::HomeHeader(date) => format!("🏠 Today — {}", date),
            Message::MitsHeader => "⭐ Most Important Tasks".to_string(),
            Message::NoMitsForToday => "No important tasks for today. Enjoy the calm! 🌴".to_string(),
            Message::RecentActivityHeader => "🕑 Recent Activity".to_string(),
            Message::NoRecentActivity => "No recent activity".to_string(),

            // Storage messages
            Message::StoreSaveFailed(namespace, err) => {
                format!("Failed to save '{}' to the local store: {}", namespace, err)
            }
            Message::StoreLoadFailed(namespace, err) => {
                format!("Failed to load '{}' from the local store: {}", namespace, err)
            }
        };
        write!(f, "{}", text)
    }
}
