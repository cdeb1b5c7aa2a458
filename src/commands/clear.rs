use crate::libs::{messages::Message, tracker::Tracker};
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

/// Discards all local state: entries, projects, and any running timer. The
/// cloud copy is untouched.
pub fn cmd(args: ClearArgs) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClearAll.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    Tracker::open().clear()?;
    msg_success!(Message::LocalDataCleared);
    Ok(())
}
