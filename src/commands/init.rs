use crate::db::db::Db;
use crate::db::seed;
use crate::db::settings::{Settings, Theme};
use crate::libs::messages::i18n::Lang;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Set the theme without prompting
    #[arg(long, value_enum)]
    theme: Option<Theme>,
    /// Set the interface language without prompting
    #[arg(long)]
    language: Option<String>,
}

pub fn cmd(args: InitArgs) -> Result<()> {
    let db = Db::new()?;
    seed::ensure_demo_data(&db)?;

    let theme = match args.theme {
        Some(theme) => theme,
        None => {
            let current = Settings::theme(&db);
            let selected = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Theme")
                .items(&["light", "dark"])
                .default(if current == Theme::Dark { 1 } else { 0 })
                .interact()?;
            if selected == 1 {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
    };
    Settings::set_theme(&db, theme)?;
    msg_success!(Message::ThemeSet(theme.as_str().to_string()));

    let lang = match args.language.as_deref() {
        Some(code) => Lang::from_code(code),
        None => {
            let current = Settings::language(&db);
            let selected = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Language")
                .items(&["en", "es"])
                .default(if current == Lang::Es { 1 } else { 0 })
                .interact()?;
            if selected == 1 {
                Lang::Es
            } else {
                Lang::En
            }
        }
    };
    Settings::set_language(&db, lang)?;
    msg_success!(Message::LanguageSet(lang.as_str().to_string()));

    msg_success!(Message::SettingsSaved);
    Ok(())
}
