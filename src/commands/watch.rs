use crate::api::{rows, CloudClient, SyncPort};
use crate::libs::{config::Config, messages::Message, tracker::Tracker};
use crate::{msg_bail_anyhow, msg_debug, msg_info};
use anyhow::Result;
use clap::Args;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Seconds between polls of the cloud copy
    #[arg(short, long, default_value = "30")]
    interval: u64,
}

/// Polls the cloud ledger and overwrites the local mirror whenever the
/// remote copy changes. This is the client-side stand-in for a realtime
/// change subscription; stop it with Ctrl-C.
pub async fn cmd(args: WatchArgs) -> Result<()> {
    let config = Config::read()?;
    let remote = match &config.remote {
        Some(remote) => remote,
        None => msg_bail_anyhow!(Message::RemoteNotConfigured),
    };
    let client = CloudClient::new(remote);
    if !client.signed_in() {
        msg_bail_anyhow!(Message::NotSignedIn);
    }

    msg_info!(Message::WatchStarted(args.interval));

    loop {
        match client.fetch_all(true).await {
            Ok(remote_rows) => {
                let entries: Vec<_> = remote_rows.iter().map(rows::row_to_entry).collect();
                let mut tracker = Tracker::open();
                if tracker.entries != entries {
                    let count = entries.len();
                    tracker.replace_entries(entries)?;
                    msg_info!(Message::WatchRefreshed(count));
                }
            }
            // Transient failures leave the mirror alone until the next poll.
            Err(err) => msg_debug!(format!("watch poll failed: {:?}", err)),
        }

        tokio::time::sleep(Duration::from_secs(args.interval)).await;
    }
}
