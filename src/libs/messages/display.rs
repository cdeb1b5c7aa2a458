//! Text rendering for the [`Message`](super::Message) catalogue.
//!
//! The single `Display` implementation is the only place message wording
//! lives; commands never format user-facing strings themselves.

use super::types::Message;
use crate::libs::clock::format_hm;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // Timer
            Message::TimerStarted(project) => format!("Timer started for '{}'", project),
            Message::TimerAlreadyRunning => "A timer is already running. Stop it before starting another".to_string(),
            Message::TimerNotRunning => "No timer is running".to_string(),
            Message::TimerStopped { project, minutes } => {
                format!("Timer stopped for '{}': {} logged", project, format_hm(*minutes))
            }

            // Validation
            Message::ProjectNameRequired => "Project name must not be blank".to_string(),
            Message::NonPositiveDuration => "Duration must be positive".to_string(),
            Message::MissingDuration => "Provide either start and end times or a duration in minutes".to_string(),
            Message::InvalidClockTime(raw) => format!("'{}' is not a valid HH:MM clock time", raw),
            Message::InvalidDate(raw) => format!("'{}' is not a valid YYYY-MM-DD date", raw),

            // Entries
            Message::EntryAdded { project, minutes } => format!("Logged {} on '{}'", format_hm(*minutes), project),
            Message::EntryUpdated(id) => format!("Entry {} updated", id),
            Message::EntryDeleted(id) => format!("Entry {} deleted", id),
            Message::EntryNotFound(id) => format!("No entry with id {}", id),
            Message::AmbiguousEntryId(prefix) => format!("Entry id '{}' is ambiguous, use more characters", prefix),
            Message::NoEntriesForView => "No entries for this view".to_string(),
            Message::LedgerHeader(label) => format!("Entries - {}", label),
            Message::DailyTotalsHeader => "Per-day totals".to_string(),
            Message::TotalTime(total) => format!("Total: {}", total),
            Message::NoChangesRequested => "Nothing to change; pass at least one field option".to_string(),

            // Projects
            Message::ProjectRegistered(name) => format!("Project '{}' registered", name),
            Message::ProjectAlreadyKnown(name) => format!("Project '{}' is already on the list", name),
            Message::NoProjectsYet => "No projects yet. They are added with the first entry".to_string(),

            // Export
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::NoEntriesToExport => "Nothing to export".to_string(),

            // Import
            Message::ImportedRows(count) => format!("{} rows imported", count),
            Message::NoValidRows => "No valid rows found in the file".to_string(),

            // Configuration
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::ConfigModuleRemote => "Remote sync configuration".to_string(),
            Message::PromptRemoteApiUrl => "Backend URL".to_string(),
            Message::PromptRemoteApiKey => "Project API key".to_string(),

            // Account
            Message::PromptEmail => "Email address".to_string(),
            Message::PromptOtpCode => "One-time code from the email".to_string(),
            Message::OtpRequested(email) => format!("A sign-in code has been sent to {}", email),
            Message::SignedIn(email) => format!("Signed in as {}", email),
            Message::SignedOut => "Signed out. Local entries were kept".to_string(),
            Message::NotSignedIn => "Not signed in. Run `tidbok login` first".to_string(),
            Message::RemoteNotConfigured => "No remote backend configured. Run `tidbok init` first".to_string(),

            // Sync
            Message::PulledEntries(count) => format!("Fetched {} entries from the cloud (local copy replaced)", count),
            Message::PushedEntries(count) => format!("Pushed {} local entries to the cloud", count),
            Message::RemoteUpToDate => "Remote copy unchanged".to_string(),
            Message::RemoteMirrorFailed(err) => format!("Cloud update failed, local change kept: {}", err),

            // Watch
            Message::WatchStarted(secs) => format!("Watching the cloud copy every {}s. Stop with Ctrl-C", secs),
            Message::WatchRefreshed(count) => format!("Remote copy changed, local mirror refreshed ({} entries)", count),

            // Admin
            Message::AdminHeader => "Hours per employee per ISO week".to_string(),
            Message::NoRemoteRows => "The cloud ledger is empty".to_string(),

            // Destructive operations
            Message::ConfirmDeleteEntry(label) => format!("Delete entry {}?", label),
            Message::ConfirmClearAll => "Delete ALL local entries, projects and any running timer?".to_string(),
            Message::LocalDataCleared => "Local data cleared".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
