use crate::api::{mirror, CloudClient};
use crate::libs::{config::Config, messages::Message, tracker::Tracker};
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Entry id, or an unambiguous prefix of one
    #[arg(required = true)]
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tracker = Tracker::open();
    let id = tracker.resolve_entry_id(&args.id)?;

    if !args.yes {
        let label = match tracker.find_entry(&id) {
            Some(entry) => format!("{} ({} on '{}')", &id[..8.min(id.len())], entry.date, entry.project),
            None => id.clone(),
        };
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteEntry(label).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    tracker.delete_entry(&id)?;
    msg_success!(Message::EntryDeleted(id.clone()));

    let config = Config::read()?;
    if let Some(remote) = &config.remote {
        let client = CloudClient::new(remote);
        if client.signed_in() {
            mirror::deleted(&client, &id).await;
        }
    }

    Ok(())
}
