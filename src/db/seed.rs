//! First-run demo content.
//!
//! A fresh store gets a populated workspace: a day of tasks, the full
//! habit routine with synthetic history, one budget and a few notes.
//! Only namespaces that have never been written are seeded, so user data
//! is never overwritten.

use super::budgets::Budgets;
use super::db::Db;
use super::habits::Habits;
use super::notes::Notes;
use super::tasks::Tasks;
use crate::libs::budget::{Budget, BudgetItem, Transaction};
use crate::libs::dates::{date_key, now_ms, today_key};
use crate::libs::habit::{Habit, HABIT_TEMPLATES};
use crate::libs::ids::new_id;
use crate::libs::note::Note;
use crate::libs::task::{Priority, Subtask, Task};
use anyhow::Result;
use chrono::{Days, Local};
use rand::Rng;
use std::collections::HashMap;

/// Per-template (streak, success rate) used for the seeded habit history.
const HABIT_SEED_STATS: &[(u32, f64)] = &[
    (5, 0.8),
    (7, 0.9),
    (3, 0.7),
    (2, 0.6),
    (6, 0.85),
    (4, 0.75),
    (5, 0.8),
    (3, 0.7),
    (1, 0.5),
    (2, 0.6),
];

/// Seeds every absent collection namespace, leaving existing ones alone.
pub fn ensure_demo_data(db: &Db) -> Result<()> {
    if !db.has_namespace(super::tasks::NAMESPACE)? {
        Tasks::save(db, &demo_tasks())?;
    }
    if !db.has_namespace(super::habits::NAMESPACE)? {
        Habits::save(db, &demo_habits())?;
    }
    if !db.has_namespace(super::budgets::NAMESPACE)? {
        Budgets::save(db, &demo_budgets())?;
    }
    if !db.has_namespace(super::notes::NAMESPACE)? {
        Notes::save(db, &demo_notes())?;
    }
    Ok(())
}

/// Success/failure records for the trailing `days` days, today included,
/// sampled at the given success probability.
pub fn generate_past_records(days: u64, success_rate: f64) -> HashMap<String, bool> {
    let today = Local::now().date_naive();
    let mut rng = rand::thread_rng();
    let mut records = HashMap::new();
    for offset in 0..days {
        let date = today.checked_sub_days(Days::new(offset)).unwrap_or(today);
        records.insert(date_key(date), rng.gen_bool(success_rate));
    }
    records
}

pub fn demo_tasks() -> Vec<Task> {
    let today = today_key();
    let tomorrow = date_key(Local::now().date_naive().checked_add_days(Days::new(1)).unwrap_or(Local::now().date_naive()));
    vec![
        demo_task("Define 3 MITs for today", "Plan the most important tasks during breakfast", &today, Priority::High, &["planning", "morning"], vec![], 1),
        demo_task(
            "Complete first deep work block",
            "60-minute focused coding session",
            &today,
            Priority::High,
            &["deepwork", "coding"],
            vec![
                demo_subtask("Review yesterday's progress"),
                demo_subtask("Work on main feature"),
                demo_subtask("Commit and push changes"),
            ],
            2,
        ),
        demo_task("Learning block: new Rust patterns", "30-45 minutes of focused learning", &today, Priority::Medium, &["learning", "rust"], vec![], 3),
        demo_task("End of day review", "Review accomplishments and plan tomorrow", &today, Priority::Medium, &["planning", "review"], vec![], 4),
        demo_task("Refactor authentication module", "Improve code quality and add tests", &tomorrow, Priority::High, &["coding", "refactor"], vec![], 5),
    ]
}

pub fn demo_habits() -> Vec<Habit> {
    HABIT_TEMPLATES
        .iter()
        .zip(HABIT_SEED_STATS)
        .map(|(template, (streak, rate))| Habit {
            id: new_id(),
            title: template.title.to_string(),
            description: template.description.to_string(),
            schedule: "daily".to_string(),
            daily_records: generate_past_records(7, *rate),
            streak: *streak,
            color: template.color.to_string(),
        })
        .collect()
}

pub fn demo_budgets() -> Vec<Budget> {
    let today = today_key();
    vec![Budget {
        id: new_id(),
        name: "Monthly Personal Budget".to_string(),
        currency: "USD".to_string(),
        items: vec![
            demo_item("Groceries", 500.0, &today, "Weekly shopping"),
            demo_item("Tech & Software", 200.0, &today, "Subscriptions and tools"),
            demo_item("Learning", 100.0, &today, "Books and courses"),
            demo_item("Entertainment", 150.0, &today, "Games and movies"),
        ],
        transactions: vec![
            Transaction {
                id: new_id(),
                item_id: None,
                amount: -45.0,
                description: "Weekly groceries".to_string(),
                date: today.clone(),
            },
            Transaction {
                id: new_id(),
                item_id: None,
                amount: -15.0,
                description: "GitHub Pro subscription".to_string(),
                date: today.clone(),
            },
        ],
    }]
}

pub fn demo_notes() -> Vec<Note> {
    let now = now_ms();
    vec![
        Note {
            id: new_id(),
            title: "Daily Programming Tips".to_string(),
            body_markdown: "# Daily Programming Tips\n\n\
                ## Code Quality\n\
                - Write **clean, readable code** first\n\
                - Optimize only when necessary\n\
                - Use *meaningful variable names*\n\n\
                ## Productivity\n\
                - Use the **Pomodoro Technique**\n\
                - Take regular breaks\n\
                - Stay hydrated 💧"
                .to_string(),
            tags: vec!["programming".to_string(), "tips".to_string()],
            updated_at: now,
        },
        Note {
            id: new_id(),
            title: "Project Ideas".to_string(),
            body_markdown: "# Project Ideas 💡\n\n\
                ## Apps\n\
                - Personal dashboard\n\
                - Habit tracker\n\
                - Budget manager\n\n\
                **Next Steps:**\n\
                1. Research tech stack\n\
                2. Create wireframes\n\
                3. Build MVP"
                .to_string(),
            tags: vec!["ideas".to_string(), "projects".to_string()],
            updated_at: now - 3_600_000,
        },
        Note {
            id: new_id(),
            title: "Stoic Meditation Notes".to_string(),
            body_markdown: "# Stoic Philosophy\n\n\
                *\"The obstacle is the way\"* - Marcus Aurelius\n\n\
                Focus on what you can control:\n\
                - Your thoughts\n\
                - Your actions\n\
                - Your responses"
                .to_string(),
            tags: vec!["meditation".to_string(), "stoic".to_string(), "philosophy".to_string()],
            updated_at: now - 86_400_000,
        },
    ]
}

fn demo_task(title: &str, description: &str, due: &str, priority: Priority, tags: &[&str], subtasks: Vec<Subtask>, order: i64) -> Task {
    Task {
        id: new_id(),
        title: title.to_string(),
        description: description.to_string(),
        due_date: due.to_string(),
        priority,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        subtasks,
        done: false,
        order,
    }
}

fn demo_subtask(text: &str) -> Subtask {
    Subtask { id: new_id(), text: text.to_string(), done: false }
}

fn demo_item(title: &str, amount: f64, date: &str, notes: &str) -> BudgetItem {
    BudgetItem {
        id: new_id(),
        title: title.to_string(),
        amount,
        date: date.to_string(),
        notes: notes.to_string(),
    }
}
