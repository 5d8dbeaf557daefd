//! Pure per-screen projections.
//!
//! Every screen renders from a display-ready structure derived here from
//! the current collections. Nothing in this module mutates state; the
//! same inputs always produce the same projection, which is what the
//! integration tests lean on.

use crate::libs::budget::Budget;
use crate::libs::dates::{last_7_days, now_ms, relative_time, today_key};
use crate::libs::habit::Habit;
use crate::libs::note::Note;
use crate::libs::task::{Task, TaskFilter};
use chrono::Local;

/// Maximum number of tasks surfaced as "most important" on the home screen.
pub const MIT_LIMIT: usize = 3;
const RECENT_LIMIT: usize = 2;
const EXCERPT_CHARS: usize = 100;

/// Display-ready projection of one screen.
#[derive(Debug, Clone)]
pub enum ScreenView {
    Home(HomeView),
    Tasks(TaskListView),
    Habits(HabitsView),
    Budgets(BudgetsView),
    Notes(NotesView),
}

#[derive(Debug, Clone)]
pub struct HomeView {
    pub date: String,
    pub max_streak: u32,
    pub tasks_done_today: usize,
    pub tasks_pending_today: usize,
    pub budget_remaining: f64,
    pub notes_count: usize,
    pub mits: Vec<Task>,
    pub habits_today: Vec<HabitTick>,
    pub recent: Vec<ActivityEntry>,
}

#[derive(Debug, Clone)]
pub struct HabitTick {
    pub id: String,
    pub title: String,
    pub streak: u32,
    pub done_today: bool,
}

#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub icon: &'static str,
    pub text: String,
    pub time: String,
}

#[derive(Debug, Clone)]
pub struct TaskListView {
    pub filter: TaskFilter,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone)]
pub struct HabitsView {
    /// Habits done today over total, as a rounded percentage.
    pub completion_rate: u32,
    pub max_streak: u32,
    pub rows: Vec<HabitRow>,
}

#[derive(Debug, Clone)]
pub struct HabitRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub streak: u32,
    pub done_today: bool,
    /// Last 7 date keys paired with that day's completion, oldest first.
    pub week: Vec<(String, bool)>,
}

#[derive(Debug, Clone)]
pub struct BudgetsView {
    pub total: f64,
    pub spent: f64,
    pub remaining: f64,
    pub rows: Vec<BudgetRow>,
}

#[derive(Debug, Clone)]
pub struct BudgetRow {
    pub id: String,
    pub name: String,
    pub currency: String,
    pub total: f64,
    pub spent: f64,
    pub remaining: f64,
    pub percent_used: f64,
}

#[derive(Debug, Clone)]
pub struct NotesView {
    pub rows: Vec<NoteRow>,
}

#[derive(Debug, Clone)]
pub struct NoteRow {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub updated: String,
}

/// Applies a task filter for a given day, then sorts for display:
/// incomplete before complete, high priority before the rest, ascending
/// manual order as the tie-breaker.
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter, today: &str) -> Vec<Task> {
    let mut filtered: Vec<Task> = tasks
        .iter()
        .filter(|t| match filter {
            TaskFilter::All => true,
            TaskFilter::Today => t.due_date == today && !t.done,
            TaskFilter::High => t.priority.is_high() && !t.done,
            TaskFilter::Completed => t.done,
        })
        .cloned()
        .collect();
    filtered.sort_by(|a, b| {
        a.done
            .cmp(&b.done)
            .then_with(|| b.priority.is_high().cmp(&a.priority.is_high()))
            .then_with(|| a.order.cmp(&b.order))
    });
    filtered
}

/// Most-important-task selection: incomplete tasks that are high priority
/// or due today, high priority first, otherwise in their original
/// relative order, capped at [`MIT_LIMIT`].
pub fn select_mits(tasks: &[Task], today: &str) -> Vec<Task> {
    let mut mits: Vec<Task> = tasks
        .iter()
        .filter(|t| !t.done && (t.priority.is_high() || t.due_date == today))
        .cloned()
        .collect();
    mits.sort_by(|a, b| b.priority.is_high().cmp(&a.priority.is_high()));
    mits.truncate(MIT_LIMIT);
    mits
}

pub fn home_view(tasks: &[Task], habits: &[Habit], budgets: &[Budget], notes: &[Note]) -> HomeView {
    let today = today_key();
    let now = now_ms();

    let habits_today = habits
        .iter()
        .map(|h| HabitTick {
            id: h.id.clone(),
            title: h.title.clone(),
            streak: h.streak,
            done_today: h.done_on(&today),
        })
        .collect();

    let mut recent = Vec::new();
    let mut done_tasks: Vec<&Task> = tasks.iter().filter(|t| t.done).collect();
    done_tasks.sort_by(|a, b| b.id.cmp(&a.id));
    for task in done_tasks.into_iter().take(RECENT_LIMIT) {
        recent.push(ActivityEntry {
            icon: "✓",
            text: format!("Completed: {}", task.title),
            time: "Today".to_string(),
        });
    }
    let mut recent_notes: Vec<&Note> = notes.iter().collect();
    recent_notes.sort_by_key(|n| std::cmp::Reverse(n.updated_at));
    for note in recent_notes.into_iter().take(RECENT_LIMIT) {
        recent.push(ActivityEntry {
            icon: "📝",
            text: format!("Updated: {}", note.title),
            time: relative_time(note.updated_at, now),
        });
    }

    HomeView {
        date: Local::now().format("%A, %B %-d, %Y").to_string(),
        max_streak: max_streak(habits),
        tasks_done_today: tasks.iter().filter(|t| t.done && t.due_date == today).count(),
        tasks_pending_today: tasks.iter().filter(|t| !t.done && t.due_date == today).count(),
        budget_remaining: budgets.iter().map(Budget::remaining).sum(),
        notes_count: notes.len(),
        mits: select_mits(tasks, &today),
        habits_today,
        recent,
    }
}

pub fn task_list_view(tasks: &[Task], filter: TaskFilter) -> TaskListView {
    TaskListView {
        filter,
        tasks: filter_tasks(tasks, filter, &today_key()),
    }
}

pub fn habits_view(habits: &[Habit]) -> HabitsView {
    let today = today_key();
    let week_keys = last_7_days(Local::now().date_naive());

    let rows = habits
        .iter()
        .map(|h| HabitRow {
            id: h.id.clone(),
            title: h.title.clone(),
            description: h.description.clone(),
            streak: h.streak,
            done_today: h.done_on(&today),
            week: week_keys.iter().map(|key| (key.clone(), h.done_on(key))).collect(),
        })
        .collect();

    HabitsView {
        completion_rate: completion_rate(habits, &today),
        max_streak: max_streak(habits),
        rows,
    }
}

/// Share of habits done on `date_key`, as a rounded percentage. Zero when
/// there are no habits.
pub fn completion_rate(habits: &[Habit], date_key: &str) -> u32 {
    if habits.is_empty() {
        return 0;
    }
    let done = habits.iter().filter(|h| h.done_on(date_key)).count();
    (done as f64 / habits.len() as f64 * 100.0).round() as u32
}

pub fn max_streak(habits: &[Habit]) -> u32 {
    habits.iter().map(|h| h.streak).max().unwrap_or(0)
}

pub fn budgets_view(budgets: &[Budget]) -> BudgetsView {
    let rows: Vec<BudgetRow> = budgets
        .iter()
        .map(|b| BudgetRow {
            id: b.id.clone(),
            name: b.name.clone(),
            currency: b.currency.clone(),
            total: b.total(),
            spent: b.spent(),
            remaining: b.remaining(),
            percent_used: b.percent_used(),
        })
        .collect();

    BudgetsView {
        total: rows.iter().map(|r| r.total).sum(),
        spent: rows.iter().map(|r| r.spent).sum(),
        remaining: rows.iter().map(|r| r.remaining).sum(),
        rows,
    }
}

/// Note listing, optionally narrowed by a case-insensitive search query.
pub fn notes_view(notes: &[Note], query: Option<&str>) -> NotesView {
    let now = now_ms();
    let rows = notes
        .iter()
        .filter(|note| match query {
            Some(q) if !q.trim().is_empty() => note.matches(q.trim()),
            _ => true,
        })
        .map(|note| NoteRow {
            id: note.id.clone(),
            title: note.title.clone(),
            excerpt: excerpt(&note.body_markdown),
            tags: note.tags.clone(),
            updated: relative_time(note.updated_at, now),
        })
        .collect();
    NotesView { rows }
}

fn excerpt(body: &str) -> String {
    let flat = body.replace('\n', " ");
    let mut out: String = flat.chars().take(EXCERPT_CHARS).collect();
    if flat.chars().count() > EXCERPT_CHARS {
        out.push_str("...");
    }
    out
}
