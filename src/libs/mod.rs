//! Core library modules for the dosa application.
//!
//! The state container, domain operations and projections live here,
//! together with the supporting utilities (ids, dates, undo, messaging,
//! console rendering). Nothing in this tree talks to the terminal except
//! `view` and the message macros.

pub mod app;
pub mod budget;
pub mod data_storage;
pub mod dates;
pub mod events;
pub mod export;
pub mod habit;
pub mod ids;
pub mod messages;
pub mod note;
pub mod projection;
pub mod screen;
pub mod task;
pub mod undo;
pub mod view;
