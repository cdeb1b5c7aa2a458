use crate::libs::{messages::Message, tracker::Tracker, view::View};
use crate::msg_info;
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::time::Duration;

/// The refresh cadence of the follow loop; driven purely by the presence of
/// a running timer.
const REFRESH_SECS: u64 = 30;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Keep refreshing the elapsed time while the timer runs
    #[arg(short, long)]
    follow: bool,
}

pub async fn cmd(args: StatusArgs) -> Result<()> {
    loop {
        // Reloaded every tick so a stop from another terminal ends the loop.
        let tracker = Tracker::open();
        let timer = match tracker.timer {
            Some(timer) => timer,
            None => {
                msg_info!(Message::TimerNotRunning);
                return Ok(());
            }
        };

        View::timer(&timer, Local::now().naive_local())?;

        if !args.follow {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_secs(REFRESH_SECS)).await;
    }
}
