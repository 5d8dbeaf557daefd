pub mod budget;
pub mod export;
pub mod habit;
pub mod home;
pub mod import;
pub mod init;
pub mod note;
pub mod reset;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show the home dashboard")]
    Home,
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "Manage daily habits")]
    Habit(habit::HabitArgs),
    #[command(about = "Manage budgets and transactions")]
    Budget(budget::BudgetArgs),
    #[command(about = "Manage markdown notes")]
    Note(note::NoteArgs),
    #[command(about = "Export all data to a JSON backup")]
    Export(export::ExportArgs),
    #[command(about = "Import a JSON backup, replacing all data")]
    Import(import::ImportArgs),
    #[command(about = "Restore demo data or clear everything")]
    Reset(reset::ResetArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Home => home::cmd(),
            Commands::Task(args) => task::cmd(args),
            Commands::Habit(args) => habit::cmd(args),
            Commands::Budget(args) => budget::cmd(args),
            Commands::Note(args) => note::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Reset(args) => reset::cmd(args),
        }
    }
}
