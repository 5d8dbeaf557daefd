use crate::libs::app::App;
use crate::libs::export::ExportDocument;
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Backup file previously produced by `dosa export`
    file: PathBuf,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let mut app = App::init()?;

    let raw = fs::read_to_string(&args.file)?;
    // Validation happens in full before any collection is replaced; a bad
    // document leaves the current data untouched.
    let document = match ExportDocument::parse(&raw) {
        Ok(document) => document,
        Err(err) => {
            msg_error!(Message::ImportFailed(err.to_string()));
            return Ok(());
        }
    };

    app.replace_collections(document);
    msg_success!(Message::DataImported);
    Ok(())
}
