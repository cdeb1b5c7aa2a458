use crate::api::{mirror, CloudClient};
use crate::libs::{
    clock::{parse_date, parse_hm, today},
    config::Config,
    messages::Message,
    tracker::{NewEntry, Tracker},
};
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Project or work-site name
    #[arg(required = true)]
    project: String,
    /// Day the work is attributed to, YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    date: Option<String>,
    /// Order or ticket number
    #[arg(short, long)]
    activity: Option<String>,
    /// Free-text notes
    #[arg(short, long)]
    notes: Option<String>,
    /// Start clock time, HH:MM (requires --end)
    #[arg(long)]
    start: Option<String>,
    /// End clock time, HH:MM (requires --start)
    #[arg(long, requires = "start")]
    end: Option<String>,
    /// Duration in minutes, instead of start/end times
    #[arg(short, long, conflicts_with_all = ["start", "end"])]
    minutes: Option<i64>,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let date = match &args.date {
        Some(raw) => parse_date(raw)?,
        None => today(),
    };
    let start = args.start.as_deref().map(parse_hm).transpose()?;
    let end = args.end.as_deref().map(parse_hm).transpose()?;

    let mut tracker = Tracker::open();
    let entry = tracker.add_entry(NewEntry {
        date,
        project: args.project,
        activity: args.activity,
        notes: args.notes,
        start,
        end,
        minutes: args.minutes,
    })?;
    msg_success!(Message::EntryAdded {
        project: entry.project.clone(),
        minutes: entry.minutes,
    });

    let config = Config::read()?;
    if let Some(remote) = &config.remote {
        let client = CloudClient::new(remote);
        if client.signed_in() {
            mirror::inserted(&client, &entry).await;
        }
    }

    Ok(())
}
