use crate::libs::app::App;
use crate::libs::habit::HABIT_TEMPLATES;
use crate::libs::messages::Message;
use crate::libs::screen::Screen;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct HabitArgs {
    #[command(subcommand)]
    command: Option<HabitCommand>,
}

#[derive(Debug, Subcommand)]
enum HabitCommand {
    /// Add a habit, from the template catalog or custom
    Add {
        /// Habit title; omit to pick from templates
        title: Option<String>,
        /// Habit description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List habits with streaks and the last 7 days
    List,
    /// Toggle today's check-in for a habit
    Toggle {
        /// Habit id to toggle
        id: String,
    },
    /// Delete a habit (undoable for a few seconds)
    Delete {
        /// Habit id to delete
        id: String,
    },
}

pub fn cmd(args: HabitArgs) -> Result<()> {
    match args.command {
        Some(HabitCommand::Add { title, description }) => handle_add(title, description),
        Some(HabitCommand::List) => handle_list(),
        Some(HabitCommand::Toggle { id }) => handle_toggle(id),
        Some(HabitCommand::Delete { id }) => handle_delete(id),
        None => handle_list(),
    }
}

fn handle_add(title: Option<String>, description: Option<String>) -> Result<()> {
    let mut app = App::init()?;

    match title {
        Some(title) => {
            app.create_habit(&title, description.as_deref().unwrap_or_default())?;
        }
        None => {
            // Template picker with a custom-habit escape hatch at the end.
            let mut items: Vec<String> = HABIT_TEMPLATES.iter().map(|t| format!("{} — {}", t.title, t.description)).collect();
            items.push("✏️ Custom habit...".to_string());
            let selected = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Add habit")
                .items(&items)
                .default(0)
                .interact()?;
            if selected < HABIT_TEMPLATES.len() {
                app.create_habit_from_template(selected)?;
            } else {
                let title: String = Input::with_theme(&ColorfulTheme::default()).with_prompt("Title").interact_text()?;
                let description: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Description")
                    .allow_empty(true)
                    .interact_text()?;
                app.create_habit(&title, &description)?;
            }
        }
    }

    msg_success!(Message::HabitCreated);
    render_habits(&mut app)
}

fn handle_list() -> Result<()> {
    let mut app = App::init()?;
    msg_print!(Message::HabitsHeader, true);
    render_habits(&mut app)
}

fn handle_toggle(id: String) -> Result<()> {
    let mut app = App::init()?;
    match app.toggle_habit(&id) {
        Some(outcome) => {
            if outcome.now_done {
                msg_success!(Message::HabitChecked);
            } else {
                msg_print!(Message::HabitUnchecked);
            }
            if outcome.all_done_today {
                msg_success!(Message::AllHabitsDoneToday);
            }
        }
        None => msg_info!(Message::HabitNotFound),
    }
    render_habits(&mut app)
}

fn handle_delete(id: String) -> Result<()> {
    let mut app = App::init()?;
    let Some(title) = app.delete_habit(&id) else {
        msg_info!(Message::HabitNotFound);
        return Ok(());
    };
    msg_print!(Message::Deleted(title));

    let restore = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptUndo.to_string())
        .default(false)
        .interact()?;
    if restore {
        match app.undo() {
            Some(restored) => msg_success!(Message::UndoApplied(restored)),
            None => msg_info!(Message::NothingToUndo),
        }
    }
    render_habits(&mut app)
}

fn render_habits(app: &mut App) -> Result<()> {
    let view = app.navigate_to(Screen::Habits);
    View::screen(&view)
}
