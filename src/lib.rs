//! # Dosa - Daily Organizer & Streak Assistant
//!
//! A command-line personal productivity tracker for managing tasks,
//! daily habits, budgets and markdown notes.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, and track tasks with subtasks, tags and priorities
//! - **Habit Tracking**: Daily check-ins with streak calculation and a 7-day history
//! - **Budgets**: Allocations, transactions, and derived spent/remaining figures
//! - **Notes**: Markdown notes with tag and full-text search
//! - **Local Persistence**: Everything lives in a single key-value store on disk
//! - **Backup**: Export and import all collections as one JSON document
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dosa::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
