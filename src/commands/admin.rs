use crate::api::{rows, CloudClient, SyncPort};
use crate::libs::{config::Config, filter::group_by_user_and_week, messages::Message, view::View};
use crate::{msg_bail_anyhow, msg_info, msg_print};
use anyhow::Result;

/// Aggregates hours per employee per ISO week across every account the
/// signed-in user can see. Row-level security means a regular account only
/// aggregates itself; the admin account sees the whole company.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let remote = match &config.remote {
        Some(remote) => remote,
        None => msg_bail_anyhow!(Message::RemoteNotConfigured),
    };
    let client = CloudClient::new(remote);
    if !client.signed_in() {
        msg_bail_anyhow!(Message::NotSignedIn);
    }

    let remote_rows = client.fetch_all(false).await?;
    if remote_rows.is_empty() {
        msg_info!(Message::NoRemoteRows);
        return Ok(());
    }

    let entries: Vec<_> = remote_rows.iter().map(rows::row_to_entry).collect();
    let totals = group_by_user_and_week(&entries);

    msg_print!(Message::AdminHeader, true);
    View::week_totals(&totals)?;
    Ok(())
}
