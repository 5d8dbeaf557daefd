use crate::libs::app::App;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Replace all collections with fresh demo data
    #[arg(long, conflicts_with = "hard")]
    demo: bool,
    /// Permanently delete all data
    #[arg(long)]
    hard: bool,
}

pub fn cmd(args: ResetArgs) -> Result<()> {
    let mut app = App::init()?;

    if args.hard {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClearAllData.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_print!(Message::OperationCancelled);
            return Ok(());
        }
        app.clear_all_data();
        msg_success!(Message::AllDataCleared);
        return Ok(());
    }

    if args.demo {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmResetToDemo.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_print!(Message::OperationCancelled);
            return Ok(());
        }
        app.reset_to_demo();
        msg_success!(Message::DemoDataRestored);
        return Ok(());
    }

    msg_warning!("Nothing to do: pass --demo or --hard");
    Ok(())
}
