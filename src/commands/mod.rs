pub mod add;
pub mod admin;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod login;
pub mod logout;
pub mod projects;
pub mod start;
pub mod status;
pub mod stop;
pub mod sync;
pub mod watch;

use crate::libs::messages::macros::is_debug_mode;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Start the timer for a project")]
    Start(start::StartArgs),
    #[command(about = "Stop the timer and log the interval")]
    Stop,
    #[command(about = "Show the running timer")]
    Status(status::StatusArgs),
    #[command(about = "Log an interval manually")]
    Add(add::AddArgs),
    #[command(about = "Edit fields of an entry")]
    Edit(edit::EditArgs),
    #[command(about = "Delete an entry")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show entries for a day, a week, or everything")]
    List(list::ListArgs),
    #[command(about = "Show or extend the project list")]
    Projects(projects::ProjectsArgs),
    #[command(about = "Export the ledger to a spreadsheet")]
    Export(export::ExportArgs),
    #[command(about = "Import entries from a spreadsheet file")]
    Import(import::ImportArgs),
    #[command(about = "Sign in with an emailed one-time code")]
    Login(login::LoginArgs),
    #[command(about = "Sign out, keeping local data")]
    Logout,
    #[command(about = "Pull the cloud ledger, or push local entries to it")]
    Sync(sync::SyncArgs),
    #[command(about = "Keep the local mirror in step with the cloud copy")]
    Watch(watch::WatchArgs),
    #[command(about = "Hours per employee per ISO week (admin accounts)")]
    Admin,
    #[command(about = "Discard all local data")]
    Clear(clear::ClearArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        if is_debug_mode() {
            let _ = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).try_init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Start(args) => start::cmd(args),
            Commands::Stop => stop::cmd().await,
            Commands::Status(args) => status::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::List(args) => list::cmd(args),
            Commands::Projects(args) => projects::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args).await,
            Commands::Login(args) => login::cmd(args).await,
            Commands::Logout => logout::cmd().await,
            Commands::Sync(args) => sync::cmd(args).await,
            Commands::Watch(args) => watch::cmd(args).await,
            Commands::Admin => admin::cmd().await,
            Commands::Clear(args) => clear::cmd(args),
        }
    }
}
