use crate::api::{mirror, CloudClient};
use crate::libs::{config::Config, messages::Message, tracker::Tracker};
use crate::msg_success;
use anyhow::Result;
use chrono::Local;

pub async fn cmd() -> Result<()> {
    let mut tracker = Tracker::open();
    let entry = tracker.stop_timer(Local::now().naive_local())?;
    msg_success!(Message::TimerStopped {
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
