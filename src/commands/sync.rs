use crate::api::{rows, CloudClient, SyncPort};
use crate::libs::{config::Config, messages::Message, tracker::Tracker};
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::collections::HashSet;

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Push local entries the cloud copy is missing, instead of pulling
    #[arg(long)]
    push: bool,
}

pub async fn cmd(args: SyncArgs) -> Result<()> {
    let config = Config::read()?;
    let remote = match &config.remote {
        Some(remote) => remote,
        None => msg_bail_anyhow!(Message::RemoteNotConfigured),
    };
    let client = CloudClient::new(remote);
    if !client.signed_in() {
        msg_bail_anyhow!(Message::NotSignedIn);
    }

    if args.push {
        push(&client).await
    } else {
        pull(&client).await
    }
}

/// Cloud overwrites local, the same policy as on login.
async fn pull(client: &CloudClient) -> Result<()> {
    let rows = client.fetch_all(true).await?;
    let entries = rows.iter().map(rows::row_to_entry).collect::<Vec<_>>();
    let count = entries.len();
    Tracker::open().replace_entries(entries)?;
    msg_success!(Message::PulledEntries(count));
    Ok(())
}

/// Uploads local entries whose ids the cloud copy does not know yet.
async fn push(client: &CloudClient) -> Result<()> {
    let known: HashSet<String> = client.fetch_all(true).await?.into_iter().map(|row| row.id).collect();

    let tracker = Tracker::open();
    let missing: Vec<_> = tracker.entries.iter().filter(|e| !known.contains(&e.id)).cloned().collect();
    if missing.is_empty() {
        msg_info!(Message::RemoteUpToDate);
        return Ok(());
    }

    let rows: Vec<_> = missing.iter().map(rows::entry_to_row).collect();
    let count = client.insert_many(&rows).await?;
    msg_success!(Message::PushedEntries(count));
    Ok(())
}
