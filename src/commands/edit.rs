use crate::api::{mirror, CloudClient};
use crate::libs::{
    clock::{parse_date, parse_hm},
    config::Config,
    entry::EntryPatch,
    messages::Message,
    tracker::Tracker,
};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Entry id, or an unambiguous prefix of one
    #[arg(required = true)]
    id: String,
    /// New date, YYYY-MM-DD
    #[arg(short, long)]
    date: Option<String>,
    /// New project name
    #[arg(short, long)]
    project: Option<String>,
    /// New order number; pass an empty string to clear
    #[arg(short, long)]
    activity: Option<String>,
    /// New notes; pass an empty string to clear
    #[arg(short, long)]
    notes: Option<String>,
    /// New start time, HH:MM; pass an empty string to clear
    #[arg(long)]
    start: Option<String>,
    /// New end time, HH:MM; pass an empty string to clear
    #[arg(long)]
    end: Option<String>,
    /// New duration in minutes
    #[arg(short, long)]
    minutes: Option<i64>,
}

/// Empty strings on clearable options mean "remove the value".
fn clearable(raw: Option<String>) -> Option<Option<String>> {
    raw.map(|value| if value.trim().is_empty() { None } else { Some(value) })
}

fn clearable_time(raw: Option<String>) -> Result<Option<Option<chrono::NaiveTime>>> {
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(Some(None)),
        Some(value) => Ok(Some(Some(parse_hm(&value)?))),
    }
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    let patch = EntryPatch {
        date: args.date.as_deref().map(parse_date).transpose()?,
        project: args.project,
        activity: clearable(args.activity),
        notes: clearable(args.notes),
        start: clearable_time(args.start)?,
        end: clearable_time(args.end)?,
        minutes: args.minutes,
    };
    if patch.is_empty() {
        msg_bail_anyhow!(Message::NoChangesRequested);
    }

    let mut tracker = Tracker::open();
    let id = tracker.resolve_entry_id(&args.id)?;
    let updated = tracker.update_entry(&id, patch.clone())?;
    msg_success!(Message::EntryUpdated(id.clone()));

    let config = Config::read()?;
    if let Some(remote) = &config.remote {
        let client = CloudClient::new(remote);
        if client.signed_in() {
            // The recomputed duration travels with the patch so the remote
            // row keeps the derived invariant too.
            let mut remote_patch = patch;
            remote_patch.minutes = Some(updated.minutes);
            mirror::updated(&client, &id, &remote_patch).await;
        }
    }

    Ok(())
}
