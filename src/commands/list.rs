use crate::libs::{
    clock::{format_hm, parse_date, today, week_window, DATE_FORMAT},
    filter::{filter_entries, sum_minutes_by_date, EntryView},
    messages::Message,
    tracker::Tracker,
    view::View,
};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which slice of the ledger to show
    #[arg(short, long, value_enum, default_value = "day")]
    view: EntryView,
    /// Reference date for the day and week views, YYYY-MM-DD
    #[arg(short, long)]
    date: Option<String>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let reference = match &args.date {
        Some(raw) => parse_date(raw)?,
        None => today(),
    };

    let tracker = Tracker::open();
    let entries = filter_entries(&tracker.entries, args.view, reference);
    if entries.is_empty() {
        msg_info!(Message::NoEntriesForView);
        return Ok(());
    }

    let label = match args.view {
        EntryView::Day => reference.format(DATE_FORMAT).to_string(),
        EntryView::Week => {
            let (monday, sunday) = week_window(reference);
            format!("week {} to {}", monday.format(DATE_FORMAT), sunday.format(DATE_FORMAT))
        }
        EntryView::All => "everything".to_string(),
    };
    msg_print!(Message::LedgerHeader(label), true);
    View::entries(&entries)?;

    let totals = sum_minutes_by_date(&entries);
    if totals.len() > 1 {
        msg_print!(Message::DailyTotalsHeader, true);
        View::day_totals(&totals)?;
    }

    let total: i64 = entries.iter().map(|e| e.minutes).sum();
    msg_print!(Message::TotalTime(format_hm(total)), true);

    Ok(())
}
