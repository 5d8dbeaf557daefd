//! UI label translation.
//!
//! Label bundles for English and Spanish are embedded at compile time and
//! selected once at startup from the persisted language setting. A bundle
//! that fails to parse falls back to the English bundle; a key missing
//! from the active bundle falls back to the raw key. Lookup is never a
//! fatal error.

use crate::msg_debug;
use std::collections::HashMap;
use std::sync::OnceLock;

const EN_BUNDLE: &str = include_str!("../../../locales/en.json");
const ES_BUNDLE: &str = include_str!("../../../locales/es.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// Parses a persisted language code; anything unknown maps to English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "es" => Lang::Es,
            _ => Lang::En,
        }
    }
}

static CATALOG: OnceLock<HashMap<String, String>> = OnceLock::new();

/// Selects the active bundle. Safe to call more than once; the first
/// selection wins for the rest of the process.
pub fn init(lang: Lang) {
    let _ = CATALOG.set(load_bundle(lang));
}

/// Translates a UI label key through the active bundle.
pub fn t(key: &str) -> String {
    match CATALOG.get_or_init(|| load_bundle(Lang::default())).get(key) {
        Some(label) => label.clone(),
        None => {
            msg_debug!(format!("Translation key not found: {}", key));
            key.to_string()
        }
    }
}

fn load_bundle(lang: Lang) -> HashMap<String, String> {
    let raw = match lang {
        Lang::En => EN_BUNDLE,
        Lang::Es => ES_BUNDLE,
    };
    match serde_json::from_str(raw) {
        Ok(bundle) => bundle,
        Err(err) => {
            tracing::warn!(lang = lang.as_str(), error = %err, "failed to parse locale bundle, falling back to English");
            serde_json::from_str(EN_BUNDLE).unwrap_or_default()
        }
    }
}
