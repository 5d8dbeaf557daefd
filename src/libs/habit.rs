//! Habit domain type and the built-in template catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Cadence of the habit; only "daily" is produced today.
    pub schedule: String,
    /// Completion flag per date key (`YYYY-MM-DD`).
    pub daily_records: HashMap<String, bool>,
    /// Consecutive completed days including today once marked. Maintained
    /// exclusively by the toggle operation.
    pub streak: u32,
    /// Display hint consumed by the presentation layer only.
    pub color: String,
}

impl Habit {
    pub fn done_on(&self, date_key: &str) -> bool {
        self.daily_records.get(date_key).copied().unwrap_or(false)
    }
}

/// A predefined habit available for one-step creation.
pub struct HabitTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

/// The programmer-routine template catalog.
pub const HABIT_TEMPLATES: &[HabitTemplate] = &[
    HabitTemplate {
        title: "🌅 Wake without snooze",
        description: "Wake up at target time without hitting snooze",
        color: "#00ff88",
    },
    HabitTemplate {
        title: "💧 Hydrate (500ml water)",
        description: "Drink 500ml water with lemon immediately after waking",
        color: "#0099ff",
    },
    HabitTemplate {
        title: "🧘 Stoic meditation (10 min)",
        description: "Morning meditation and journaling",
        color: "#9333ea",
    },
    HabitTemplate {
        title: "🏃 Mobility routine",
        description: "15-20 minutes of stretching and calisthenics",
        color: "#f59e0b",
    },
    HabitTemplate {
        title: "⭐ Define 3 MITs",
        description: "Plan the 3 most important tasks during breakfast",
        color: "#00ff88",
    },
    HabitTemplate {
        title: "🎯 Complete first deep work block",
        description: "60-minute focused work session",
        color: "#ef4444",
    },
    HabitTemplate {
        title: "📚 Learning block (30-45 min)",
        description: "Dedicated time for learning new skills",
        color: "#8b5cf6",
    },
    HabitTemplate {
        title: "📝 End of day review",
        description: "Review accomplishments and plan tomorrow",
        color: "#10b981",
    },
    HabitTemplate {
        title: "🌙 Digital sunset (6 PM)",
        description: "Disconnect from screens by 6 PM",
        color: "#f97316",
    },
    HabitTemplate {
        title: "😴 Sleep prep by 9 PM",
        description: "Begin sleep routine, target sleep by 11 PM",
        color: "#06b6d4",
    },
];
