use crate::libs::{
    clock::{parse_date, today},
    export::{ExportFormat, Exporter},
    filter::{filter_entries, EntryView},
    messages::Message,
    tracker::Tracker,
};
use crate::msg_info;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Output file path; a timestamped name is generated when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Slice of the ledger to export
    #[arg(short, long, value_enum, default_value = "all")]
    view: EntryView,
    /// Reference date for the day and week views, YYYY-MM-DD
    #[arg(short, long)]
    date: Option<String>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let reference = match &args.date {
        Some(raw) => parse_date(raw)?,
        None => today(),
    };

    let tracker = Tracker::open();
    let entries = filter_entries(&tracker.entries, args.view, reference);
    if entries.is_empty() {
        msg_info!(Message::NoEntriesToExport);
        return Ok(());
    }

    Exporter::new(args.format, args.output).export(&entries)?;
    Ok(())
}
