use crate::api::{rows, CloudClient, SyncPort};
use crate::libs::{config::Config, messages::Message, tracker::Tracker};
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email address; prompted for when omitted
    email: Option<String>,
}

pub async fn cmd(args: LoginArgs) -> Result<()> {
    let config = Config::read()?;
    let remote = match &config.remote {
        Some(remote) => remote,
        None => msg_bail_anyhow!(Message::RemoteNotConfigured),
    };
    let client = CloudClient::new(remote);

    let email = match args.email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?,
    };

    client.request_code(&email).await?;
    msg_info!(Message::OtpRequested(email.clone()));

    let code: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptOtpCode.to_string())
        .interact_text()?;
    let session = client.verify_code(&email, code.trim()).await?;
    msg_success!(Message::SignedIn(session.email));

    // Cloud overwrites local on login: unsynced local edits are discarded
    // in favor of the account's copy.
    let rows = client.fetch_all(true).await?;
    let entries = rows.iter().map(rows::row_to_entry).collect::<Vec<_>>();
    let count = entries.len();
    Tracker::open().replace_entries(entries)?;
    msg_info!(Message::PulledEntries(count));

    Ok(())
}
