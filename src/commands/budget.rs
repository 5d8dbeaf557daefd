use crate::libs::app::App;
use crate::libs::messages::Message;
use crate::libs::screen::Screen;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};
use prettytable::{row, Table};

#[derive(Debug, Args)]
pub struct BudgetArgs {
    #[command(subcommand)]
    command: Option<BudgetCommand>,
}

#[derive(Debug, Subcommand)]
enum BudgetCommand {
    /// Create a new budget
    Create {
        /// Budget name
        name: String,
        /// Currency code
        #[arg(short, long, default_value = "USD")]
        currency: String,
    },
    /// List budgets with totals
    List,
    /// Show a budget's items and transactions
    Show {
        /// Budget id
        id: String,
    },
    /// Add an allocation item to a budget
    AddItem {
        /// Budget id
        budget_id: String,
        /// Item title
        title: String,
        /// Budgeted amount
        amount: f64,
        /// Item notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },
    /// Delete an item from a budget (undoable for a few seconds)
    DeleteItem {
        /// Budget id
        budget_id: String,
        /// Item id
        item_id: String,
    },
    /// Record a transaction (negative amount = expense)
    Spend {
        /// Budget id
        budget_id: String,
        /// Transaction description
        description: String,
        /// Signed amount
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },
    /// Delete a whole budget (cannot be undone)
    Delete {
        /// Budget id
        id: String,
    },
}

pub fn cmd(args: BudgetArgs) -> Result<()> {
    match args.command {
        Some(BudgetCommand::Create { name, currency }) => handle_create(name, currency),
        Some(BudgetCommand::List) => handle_list(),
        Some(BudgetCommand::Show { id }) => handle_show(id),
        Some(BudgetCommand::AddItem { budget_id, title, amount, notes }) => handle_add_item(budget_id, title, amount, notes),
        Some(BudgetCommand::DeleteItem { budget_id, item_id }) => handle_delete_item(budget_id, item_id),
        Some(BudgetCommand::Spend { budget_id, description, amount }) => handle_spend(budget_id, description, amount),
        Some(BudgetCommand::Delete { id }) => handle_delete(id),
        None => handle_list(),
    }
}

fn handle_create(name: String, currency: String) -> Result<()> {
    let mut app = App::init()?;
    app.create_budget(&name, &currency)?;
    msg_success!(Message::BudgetCreated);
    render_budgets(&mut app)
}

fn handle_list() -> Result<()> {
    let mut app = App::init()?;
    msg_print!(Message::BudgetsHeader, true);
    render_budgets(&mut app)
}

fn handle_show(id: String) -> Result<()> {
    let app = App::init()?;
    let Some(budget) = app.budgets.iter().find(|b| b.id == id) else {
        msg_info!(Message::BudgetNotFound);
        return Ok(());
    };

    msg_print!(format!("💰 {} ({})", budget.name, budget.currency), true);

    let mut items = Table::new();
    items.add_row(row!["ITEM ID", "TITLE", "AMOUNT", "DATE", "NOTES"]);
    for item in &budget.items {
        items.add_row(row![item.id, item.title, format!("{:.2}", item.amount), item.date, item.notes]);
    }
    items.printstd();

    let mut transactions = Table::new();
    transactions.add_row(row!["TX ID", "DESCRIPTION", "AMOUNT", "DATE"]);
    for t in &budget.transactions {
        let sign = if t.amount < 0.0 { "-" } else { "+" };
        transactions.add_row(row![t.id, t.description, format!("{}{:.2}", sign, t.amount.abs()), t.date]);
    }
    transactions.printstd();

    msg_print!(format!(
        "Budget: {:.2}  Spent: {:.2}  Remaining: {:.2}  ({:.1}% used)",
        budget.total(),
        budget.spent(),
        budget.remaining(),
        budget.percent_used()
    ));
    Ok(())
}

fn handle_add_item(budget_id: String, title: String, amount: f64, notes: String) -> Result<()> {
    let mut app = App::init()?;
    match app.add_budget_item(&budget_id, &title, amount, &notes) {
        Some(()) => msg_success!(Message::BudgetItemAdded),
        None => msg_info!(Message::BudgetNotFound),
    }
    render_budgets(&mut app)
}

fn handle_delete_item(budget_id: String, item_id: String) -> Result<()> {
    let mut app = App::init()?;
    let Some(title) = app.delete_budget_item(&budget_id, &item_id) else {
        msg_info!(Message::BudgetItemNotFound);
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
    render_budgets(&mut app)
}

fn handle_spend(budget_id: String, description: String, amount: f64) -> Result<()> {
    let mut app = App::init()?;
    match app.add_transaction(&budget_id, &description, amount) {
        Some(()) => msg_success!(Message::TransactionAdded),
        None => msg_info!(Message::BudgetNotFound),
    }
    render_budgets(&mut app)
}

fn handle_delete(id: String) -> Result<()> {
    let mut app = App::init()?;
    let Some(budget) = app.budgets.iter().find(|b| b.id == id) else {
        msg_info!(Message::BudgetNotFound);
        return Ok(());
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteBudget(budget.name.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_print!(Message::OperationCancelled);
        return Ok(());
    }

    if app.delete_budget(&id) {
        msg_success!(Message::BudgetDeleted);
    }
    render_budgets(&mut app)
}

fn render_budgets(app: &mut App) -> Result<()> {
    let view = app.navigate_to(Screen::Budgets);
    View::screen(&view)
}
