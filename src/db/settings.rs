//! Typed accessors for the persisted scalar settings.
//!
//! Scalars share the key-value store with the collections but are stored
//! as plain text rather than JSON. Unreadable or missing values fall back
//! to defaults; settings reads never fail the caller.

use super::db::Db;
use crate::libs::messages::i18n::Lang;
use anyhow::Result;

pub const VISIT_COUNTER: &str = "visit_counter";
pub const THEME: &str = "theme";
pub const LANGUAGE: &str = "userLanguage";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_str(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

pub struct Settings;

impl Settings {
    /// Current visit count; absent or unparseable values read as zero.
    pub fn visit_counter(db: &Db) -> i64 {
        db.load_raw(VISIT_COUNTER)
            .ok()
            .flatten()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Increments and persists the visit counter, returning the new count.
    pub fn bump_visit_counter(db: &Db) -> Result<i64> {
        let count = Self::visit_counter(db) + 1;
        db.save_raw(VISIT_COUNTER, &count.to_string())?;
        Ok(count)
    }

    pub fn theme(db: &Db) -> Theme {
        db.load_raw(THEME)
            .ok()
            .flatten()
            .map(|raw| Theme::from_str(&raw))
            .unwrap_or_default()
    }

    pub fn set_theme(db: &Db, theme: Theme) -> Result<()> {
        db.save_raw(THEME, theme.as_str())
    }

    pub fn language(db: &Db) -> Lang {
        db.load_raw(LANGUAGE)
            .ok()
            .flatten()
            .map(|raw| Lang::from_code(&raw))
            .unwrap_or_default()
    }

    pub fn set_language(db: &Db, lang: Lang) -> Result<()> {
        db.save_raw(LANGUAGE, lang.as_str())
    }
}
