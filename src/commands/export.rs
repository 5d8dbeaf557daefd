use crate::libs::app::App;
use crate::libs::dates::now_ms;
use crate::libs::export::backup_file_name;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file; defaults to a timestamped name in the current directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let app = App::init()?;
    let path = args.output.unwrap_or_else(|| PathBuf::from(backup_file_name(now_ms())));

    let document = app.export_document();
    fs::write(&path, document.to_json()?)?;

    msg_success!(Message::DataExported(path.display().to_string()));
    Ok(())
}
