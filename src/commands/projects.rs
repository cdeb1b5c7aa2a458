use crate::libs::{messages::Message, tracker::Tracker};
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ProjectsArgs {
    /// Register a project name without logging an entry
    #[arg(short, long)]
    add: Option<String>,
}

pub fn cmd(args: ProjectsArgs) -> Result<()> {
    let mut tracker = Tracker::open();

    if let Some(name) = args.add {
        if tracker.register_project(&name)? {
            msg_success!(Message::ProjectRegistered(name.trim().to_string()));
        } else {
            msg_info!(Message::ProjectAlreadyKnown(name.trim().to_string()));
        }
        return Ok(());
    }

    if tracker.projects.is_empty() {
        msg_info!(Message::NoProjectsYet);
        return Ok(());
    }
    for project in &tracker.projects {
        println!("{}", project);
    }
    Ok(())
}
