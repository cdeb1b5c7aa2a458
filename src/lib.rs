//! # Tidbok - work-hour ledger for the command line
//!
//! A command-line application for logging work intervals against a
//! project/order pair, either with a live timer or by manual entry.
//!
//! ## Features
//!
//! - **Live Timer**: Start and stop a single running timer per workstation
//! - **Manual Entries**: Log intervals with start/end times or a raw duration
//! - **Views**: Filter the ledger by day, week, or everything, with subtotals
//! - **Data Export**: Export the ledger to CSV, JSON, and Excel spreadsheets
//! - **Bulk Import**: Import loosely formatted spreadsheet exports
//! - **Cloud Sync**: Optional passwordless sign-in with best-effort mirroring
//! - **Admin View**: Hours per employee per ISO week across all accounts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tidbok::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
