use crate::api::CloudClient;
use crate::libs::{config::Config, messages::Message};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let remote = match &config.remote {
        Some(remote) => remote,
        None => msg_bail_anyhow!(Message::RemoteNotConfigured),
    };

    CloudClient::new(remote).sign_out().await?;
    msg_success!(Message::SignedOut);
    Ok(())
}
