use crate::libs::app::App;
use crate::libs::messages::Message;
use crate::libs::projection::notes_view;
use crate::libs::screen::Screen;
use crate::libs::task::parse_tags;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Editor, Input};

#[derive(Debug, Args)]
pub struct NoteArgs {
    #[command(subcommand)]
    command: Option<NoteCommand>,
}

#[derive(Debug, Subcommand)]
enum NoteCommand {
    /// Create a markdown note
    Create {
        /// Note title
        title: Option<String>,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
        /// Note body; omit to open an editor
        #[arg(short, long)]
        body: Option<String>,
    },
    /// List notes
    List,
    /// Search notes by title, body or tag
    Search {
        /// Case-insensitive query
        query: String,
    },
    /// Show a note's full body
    Show {
        /// Note id
        id: String,
    },
    /// Edit a note
    Edit {
        /// Note id to edit
        id: String,
    },
    /// Delete a note (undoable for a few seconds)
    Delete {
        /// Note id to delete
        id: String,
    },
}

pub fn cmd(args: NoteArgs) -> Result<()> {
    match args.command {
        Some(NoteCommand::Create { title, tags, body }) => handle_create(title, tags, body),
        Some(NoteCommand::List) => handle_list(),
        Some(NoteCommand::Search { query }) => handle_search(query),
        Some(NoteCommand::Show { id }) => handle_show(id),
        Some(NoteCommand::Edit { id }) => handle_edit(id),
        Some(NoteCommand::Delete { id }) => handle_delete(id),
        None => handle_list(),
    }
}

fn handle_create(title: Option<String>, tags: Option<String>, body: Option<String>) -> Result<()> {
    let mut app = App::init()?;

    let title = match title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default()).with_prompt("Title").interact_text()?,
    };
    let body = match body {
        Some(body) => body,
        None => Editor::new().edit("# Write your note in markdown...")?.unwrap_or_default(),
    };
    let tags = tags.as_deref().map(parse_tags).unwrap_or_default();

    app.create_note(&title, &body, tags)?;
    msg_success!(Message::NoteCreated);
    render_notes(&mut app)
}

fn handle_list() -> Result<()> {
    let mut app = App::init()?;
    msg_print!(Message::NotesHeader, true);
    render_notes(&mut app)
}

fn handle_search(query: String) -> Result<()> {
    let app = App::init()?;
    View::notes(&notes_view(&app.notes, Some(&query)))
}

fn handle_show(id: String) -> Result<()> {
    let app = App::init()?;
    let Some(note) = app.notes.iter().find(|n| n.id == id) else {
        msg_info!(Message::NoteNotFound);
        return Ok(());
    };
    msg_print!(format!("📝 {}  [{}]", note.title, note.tags.join(", ")), true);
    msg_print!(note.body_markdown);
    Ok(())
}

fn handle_edit(id: String) -> Result<()> {
    let mut app = App::init()?;

    let Some(note) = app.notes.iter().find(|n| n.id == id).cloned() else {
        msg_info!(Message::NoteNotFound);
        return Ok(());
    };

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Title")
        .default(note.title.clone())
        .interact_text()?;
    let body = Editor::new().edit(&note.body_markdown)?.unwrap_or(note.body_markdown);
    let tags: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Tags (comma-separated)")
        .default(note.tags.join(", "))
        .allow_empty(true)
        .interact_text()?;

    if app.update_note(&id, &title, &body, parse_tags(&tags))? {
        msg_success!(Message::NoteUpdated);
    } else {
        msg_info!(Message::NoteNotFound);
    }
    render_notes(&mut app)
}

fn handle_delete(id: String) -> Result<()> {
    let mut app = App::init()?;
    let Some(title) = app.delete_note(&id) else {
        msg_info!(Message::NoteNotFound);
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
    render_notes(&mut app)
}

fn render_notes(app: &mut App) -> Result<()> {
    let view = app.navigate_to(Screen::Notes);
    View::screen(&view)
}
