//! Console rendering of screen projections.
//!
//! The view layer is the only place where projections meet the terminal:
//! it draws tables, it never reads or mutates application state, and all
//! column labels come from the active locale bundle.

use crate::libs::messages::i18n::t;
use crate::libs::messages::Message;
use crate::libs::projection::{BudgetsView, HabitsView, HomeView, NotesView, ScreenView, TaskListView};
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders whichever screen projection the navigator produced.
    pub fn screen(view: &ScreenView) -> Result<()> {
        match view {
            ScreenView::Home(home) => Self::home(home),
            ScreenView::Tasks(tasks) => Self::tasks(tasks),
            ScreenView::Habits(habits) => Self::habits(habits),
            ScreenView::Budgets(budgets) => Self::budgets(budgets),
            ScreenView::Notes(notes) => Self::notes(notes),
        }
    }

    pub fn home(view: &HomeView) -> Result<()> {
        msg_print!(Message::HomeHeader(view.date.clone()), true);

        let mut stats = Table::new();
        stats.add_row(row![
            t("home.tasks_today"),
            format!("{}/{}", view.tasks_done_today, view.tasks_done_today + view.tasks_pending_today)
        ]);
        stats.add_row(row![t("home.max_streak"), format!("{} 🔥", view.max_streak)]);
        stats.add_row(row![t("home.budget_remaining"), format!("${:.0}", view.budget_remaining)]);
        stats.add_row(row![t("home.notes_count"), view.notes_count]);
        stats.printstd();

        msg_print!(Message::MitsHeader, true);
        if view.mits.is_empty() {
            msg_print!(Message::NoMitsForToday);
        } else {
            let mut table = Table::new();
            table.add_row(row![t("tasks.col.done"), t("tasks.col.title"), t("tasks.col.priority"), t("tasks.col.due")]);
            for task in &view.mits {
                table.add_row(row![
                    if task.done { "✓" } else { " " },
                    task.title,
                    if task.priority.is_high() { "⚡ high" } else { "" },
                    task.due_date
                ]);
            }
            table.printstd();
        }

        if !view.habits_today.is_empty() {
            let mut table = Table::new();
            table.add_row(row![t("habits.col.today"), t("habits.col.title"), t("habits.col.streak")]);
            for habit in &view.habits_today {
                table.add_row(row![
                    if habit.done_today { "✓" } else { "○" },
                    habit.title,
                    format!("🔥 {}", habit.streak)
                ]);
            }
            table.printstd();
        }

        msg_print!(Message::RecentActivityHeader, true);
        if view.recent.is_empty() {
            msg_print!(Message::NoRecentActivity);
        } else {
            for entry in &view.recent {
                msg_print!(format!("{} {} ({})", entry.icon, entry.text, entry.time));
            }
        }
        Ok(())
    }

    pub fn tasks(view: &TaskListView) -> Result<()> {
        if view.tasks.is_empty() {
            msg_print!(Message::NoTasksFound);
            return Ok(());
        }
        let mut table = Table::new();
        table.add_row(row![
            "ID",
            t("tasks.col.done"),
            t("tasks.col.title"),
            t("tasks.col.due"),
            t("tasks.col.priority"),
            t("tasks.col.tags"),
            t("tasks.col.subtasks")
        ]);
        for task in &view.tasks {
            let subtasks = if task.subtasks.is_empty() {
                String::new()
            } else {
                format!(
                    "{}/{}",
                    task.subtasks.iter().filter(|st| st.done).count(),
                    task.subtasks.len()
                )
            };
            table.add_row(row![
                task.id,
                if task.done { "✓" } else { " " },
                task.title,
                task.due_date,
                format!("{:?}", task.priority).to_lowercase(),
                task.tags.join(", "),
                subtasks
            ]);
        }
        table.printstd();
        Ok(())
    }

    pub fn habits(view: &HabitsView) -> Result<()> {
        if view.rows.is_empty() {
            msg_print!(Message::NoHabitsFound);
            return Ok(());
        }
        msg_print!(format!("{}: {}%   {}: {} 🔥", t("habits.completion_rate"), view.completion_rate, t("habits.max_streak"), view.max_streak), true);

        let mut table = Table::new();
        table.add_row(row![
            "ID",
            t("habits.col.today"),
            t("habits.col.title"),
            t("habits.col.streak"),
            t("habits.col.week")
        ]);
        for habit in &view.rows {
            let week = habit
                .week
                .iter()
                .map(|(_, done)| if *done { "✓" } else { "·" })
                .collect::<Vec<_>>()
                .join(" ");
            table.add_row(row![
                habit.id,
                if habit.done_today { "✓" } else { "○" },
                habit.title,
                habit.streak,
                week
            ]);
        }
        table.printstd();
        Ok(())
    }

    pub fn budgets(view: &BudgetsView) -> Result<()> {
        if view.rows.is_empty() {
            msg_print!(Message::NoBudgetsFound);
            return Ok(());
        }
        let mut table = Table::new();
        table.add_row(row![
            "ID",
            t("budgets.col.name"),
            t("budgets.col.total"),
            t("budgets.col.spent"),
            t("budgets.col.remaining"),
            t("budgets.col.used")
        ]);
        for budget in &view.rows {
            table.add_row(row![
                budget.id,
                budget.name,
                format!("{:.2} {}", budget.total, budget.currency),
                format!("{:.2}", budget.spent),
                format!("{:.2}", budget.remaining),
                format!("{:.1}%", budget.percent_used)
            ]);
        }
        table.printstd();
        msg_print!(format!(
            "{}: ${:.2}   {}: ${:.2}   {}: ${:.2}",
            t("budgets.col.total"),
            view.total,
            t("budgets.col.spent"),
            view.spent,
            t("budgets.col.remaining"),
            view.remaining
        ));
        Ok(())
    }

    pub fn notes(view: &NotesView) -> Result<()> {
        if view.rows.is_empty() {
            msg_print!(Message::NoNotesFound);
            return Ok(());
        }
        let mut table = Table::new();
        table.add_row(row!["ID", t("notes.col.title"), t("notes.col.tags"), t("notes.col.updated")]);
        for note in &view.rows {
            table.add_row(row![note.id, note.title, note.tags.join(", "), note.updated]);
        }
        table.printstd();
        Ok(())
    }
}
