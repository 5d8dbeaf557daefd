use crate::libs::app::App;
use crate::libs::dates::to_date_key;
use crate::libs::messages::Message;
use crate::libs::screen::Screen;
use crate::libs::task::{parse_tags, Priority, SubtaskDraft, TaskDraft, TaskFilter};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommand>,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task
    Create {
        /// Task title
        title: Option<String>,
        /// Task description
        #[arg(short, long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// Task priority
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },
    /// List tasks, optionally filtered
    List {
        /// Filter to apply
        #[arg(short, long, value_enum)]
        filter: Option<TaskFilter>,
    },
    /// Edit a task interactively
    Edit {
        /// Task id to edit
        id: String,
    },
    /// Toggle a task's completion
    Toggle {
        /// Task id to toggle
        id: String,
    },
    /// Toggle a subtask's completion
    Subtask {
        /// Parent task id
        task_id: String,
        /// Subtask id to toggle
        subtask_id: String,
    },
    /// Delete a task (undoable for a few seconds)
    Delete {
        /// Task id to delete
        id: String,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        Some(TaskCommand::Create { title, description, due, priority, tags }) => {
            handle_create(title, description, due, priority, tags)
        }
        Some(TaskCommand::List { filter }) => handle_list(filter),
        Some(TaskCommand::Edit { id }) => handle_edit(id),
        Some(TaskCommand::Toggle { id }) => handle_toggle(id),
        Some(TaskCommand::Subtask { task_id, subtask_id }) => handle_subtask(task_id, subtask_id),
        Some(TaskCommand::Delete { id }) => handle_delete(id),
        None => handle_list(None),
    }
}

fn handle_create(
    title: Option<String>,
    description: Option<String>,
    due: Option<String>,
    priority: Option<Priority>,
    tags: Option<String>,
) -> Result<()> {
    let mut app = App::init()?;

    let title = match title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default()).with_prompt("Title").interact_text()?,
    };
    let due_date = match due.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        Some(raw) => match to_date_key(raw) {
            Some(key) => key,
            None => {
                msg_error!(format!("'{}' is not a valid date (expected YYYY-MM-DD)", raw));
                return Ok(());
            }
        },
        None => String::new(),
    };

    let draft = TaskDraft {
        title,
        description: description.unwrap_or_default(),
        due_date,
        priority,
        tags: tags.as_deref().map(parse_tags).unwrap_or_default(),
        subtasks: Vec::new(),
    };

    app.create_task(draft)?;
    msg_success!(Message::TaskCreated);
    render_tasks(&mut app)
}

fn handle_list(filter: Option<TaskFilter>) -> Result<()> {
    let mut app = App::init()?;
    if let Some(filter) = filter {
        app.set_task_filter(filter);
    }
    msg_print!(Message::TasksHeader, true);
    render_tasks(&mut app)
}

fn handle_edit(id: String) -> Result<()> {
    let mut app = App::init()?;

    let Some(task) = app.tasks.iter().find(|t| t.id == id).cloned() else {
        msg_info!(Message::TaskNotFound);
        return Ok(());
    };

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Title")
        .default(task.title.clone())
        .interact_text()?;
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Description")
        .default(task.description.clone())
        .allow_empty(true)
        .interact_text()?;
    let due: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Due date (YYYY-MM-DD, empty for none)")
        .default(task.due_date.clone())
        .allow_empty(true)
        .interact_text()?;
    let priorities = ["low", "medium", "high"];
    let current = match task.priority {
        Priority::Low => 0,
        Priority::Medium => 1,
        Priority::High => 2,
    };
    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Priority")
        .items(&priorities)
        .default(current)
        .interact()?;
    let priority = [Priority::Low, Priority::Medium, Priority::High][selected];
    let tags: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Tags (comma-separated)")
        .default(task.tags.join(", "))
        .allow_empty(true)
        .interact_text()?;

    // Existing subtasks can be re-worded or emptied out to drop them.
    let mut subtasks = Vec::new();
    for subtask in &task.subtasks {
        let text: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Subtask (empty to remove): {}", subtask.text))
            .default(subtask.text.clone())
            .allow_empty(true)
            .interact_text()?;
        subtasks.push(SubtaskDraft { id: Some(subtask.id.clone()), text });
    }
    loop {
        let text: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("New subtask (empty to finish)")
            .allow_empty(true)
            .interact_text()?;
        if text.trim().is_empty() {
            break;
        }
        subtasks.push(SubtaskDraft { id: None, text });
    }

    let due_date = match due.trim() {
        "" => String::new(),
        raw => match to_date_key(raw) {
            Some(key) => key,
            None => {
                msg_error!(format!("'{}' is not a valid date (expected YYYY-MM-DD)", raw));
                return Ok(());
            }
        },
    };

    let draft = TaskDraft {
        title,
        description,
        due_date,
        priority: Some(priority),
        tags: parse_tags(&tags),
        subtasks,
    };

    if app.update_task(&id, draft)? {
        msg_success!(Message::TaskUpdated);
    } else {
        msg_info!(Message::TaskNotFound);
    }
    render_tasks(&mut app)
}

fn handle_toggle(id: String) -> Result<()> {
    let mut app = App::init()?;
    match app.toggle_task(&id) {
        Some(true) => msg_success!(Message::TaskCompleted),
        Some(false) => msg_print!(Message::TaskReopened),
        None => msg_info!(Message::TaskNotFound),
    }
    render_tasks(&mut app)
}

fn handle_subtask(task_id: String, subtask_id: String) -> Result<()> {
    let mut app = App::init()?;
    if app.toggle_subtask(&task_id, &subtask_id).is_none() {
        msg_info!(Message::SubtaskNotFound);
    }
    render_tasks(&mut app)
}

fn handle_delete(id: String) -> Result<()> {
    let mut app = App::init()?;
    let Some(title) = app.delete_task(&id) else {
        msg_info!(Message::TaskNotFound);
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
    render_tasks(&mut app)
}

fn render_tasks(app: &mut App) -> Result<()> {
    let view = app.navigate_to(Screen::Tasks);
    View::screen(&view)
}
