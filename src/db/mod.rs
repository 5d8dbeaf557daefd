//! Persistence layer for the dosa application.
//!
//! Everything durable lives in a single key-value table: one namespace
//! per collection plus a handful of scalar settings. Each namespace has
//! its own typed accessor module, so callers never touch raw storage
//! values or guess at a value's shape.

/// Core key-value store connection and raw namespace access.
pub mod db;

/// Budget collection accessor.
pub mod budgets;

/// Habit collection accessor.
pub mod habits;

/// Note collection accessor.
pub mod notes;

/// First-run demo content seeding.
pub mod seed;

/// Scalar settings: visit counter, theme, language.
pub mod settings;

/// Task collection accessor.
pub mod tasks;
