use crate::libs::{messages::Message, tracker::Tracker};
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Project or work-site name
    #[arg(required = true)]
    project: String,
    /// Order or ticket number
    #[arg(short, long)]
    activity: Option<String>,
    /// Free-text notes carried into the logged entry
    #[arg(short, long)]
    notes: Option<String>,
}

pub fn cmd(args: StartArgs) -> Result<()> {
    let mut tracker = Tracker::open();
    let timer = tracker.start_timer(&args.project, args.activity, args.notes, Local::now().naive_local())?;
    msg_success!(Message::TimerStarted(timer.project));
    Ok(())
}
