use crate::api::{mirror, CloudClient};
use crate::libs::{config::Config, import::read_table, messages::Message, tracker::Tracker};
use crate::{msg_debug, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Spreadsheet export to read (CSV, `,` or `;` delimited)
    #[arg(required = true)]
    file: PathBuf,
}

pub async fn cmd(args: ImportArgs) -> Result<()> {
    let report = read_table(&args.file)?;
    msg_debug!(format!("import parsed {} rows, {} dropped", report.entries.len(), report.skipped));

    if report.entries.is_empty() {
        msg_warning!(Message::NoValidRows);
        return Ok(());
    }

    let mut tracker = Tracker::open();
    let entries = report.entries;
    let count = tracker.append_entries(entries.clone())?;

    let config = Config::read()?;
    if let Some(remote) = &config.remote {
        let client = CloudClient::new(remote);
        if client.signed_in() {
            mirror::imported(&client, &entries).await;
        }
    }

    msg_success!(Message::ImportedRows(count));
    Ok(())
}
