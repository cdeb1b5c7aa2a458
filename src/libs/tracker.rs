//! Ledger state and its transitions.
//!
//! The [`Tracker`] owns the three pieces of local state: the entry list, the
//! project list, and the single running-timer slot. Every mutation validates
//! its input, applies the change, and persists the touched keys before
//! returning; remote mirroring is the caller's best-effort concern and never
//! rolls a local change back.
//!
//! Loading is tolerant: a missing or malformed payload becomes the empty
//! default for that key.

use crate::libs::clock::minutes_between;
use crate::libs::entry::{Entry, EntryPatch};
use crate::libs::messages::Message;
use crate::libs::store::{JsonStore, StorageKey, StoragePort};
use crate::libs::timer::RunningTimer;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Fields for a manual entry submission.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub project: String,
    pub activity: Option<String>,
    pub notes: Option<String>,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub minutes: Option<i64>,
}

pub struct Tracker {
    storage: Box<dyn StoragePort>,
    pub entries: Vec<Entry>,
    pub projects: Vec<String>,
    pub timer: Option<RunningTimer>,
}

impl Tracker {
    /// Loads the ledger from the default file-backed store.
    pub fn open() -> Self {
        Self::load(Box::new(JsonStore::new()))
    }

    /// Loads the ledger from an injected store, treating missing or
    /// malformed payloads as empty state.
    pub fn load(storage: Box<dyn StoragePort>) -> Self {
        let entries = read_key(storage.as_ref(), StorageKey::Entries).unwrap_or_default();
        let projects = read_key(storage.as_ref(), StorageKey::Projects).unwrap_or_default();
        let timer = read_key(storage.as_ref(), StorageKey::Timer);
        Tracker {
            storage,
            entries,
            projects,
            timer,
        }
    }

    /// Starts the timer. Fails without touching state when a timer is
    /// already running or the project name is blank.
    pub fn start_timer(&mut self, project: &str, activity: Option<String>, notes: Option<String>, now: NaiveDateTime) -> Result<RunningTimer> {
        if self.timer.is_some() {
            msg_bail_anyhow!(Message::TimerAlreadyRunning);
        }
        let project = project.trim();
        if project.is_empty() {
            msg_bail_anyhow!(Message::ProjectNameRequired);
        }
        self.register_project(project)?;
        let timer = RunningTimer::begin(project, activity, notes, now);
        self.storage.save(StorageKey::Timer, &serde_json::to_string(&timer)?)?;
        self.timer = Some(timer.clone());
        Ok(timer)
    }

    /// Stops the timer and appends the completed entry, never shorter than
    /// one minute. The timer storage key is removed so its absence keeps
    /// meaning "no timer running".
    pub fn stop_timer(&mut self, now: NaiveDateTime) -> Result<Entry> {
        let timer = self.timer.take().ok_or_else(|| msg_error_anyhow!(Message::TimerNotRunning))?;
        let entry = timer.into_entry(now);
        self.entries.push(entry.clone());
        self.persist_entries()?;
        self.storage.remove(StorageKey::Timer)?;
        Ok(entry)
    }

    /// Appends a manually submitted entry.
    ///
    /// The duration comes from `start`/`end` when both are given (and must
    /// be positive), otherwise from `minutes` directly.
    pub fn add_entry(&mut self, draft: NewEntry) -> Result<Entry> {
        let project = draft.project.trim().to_string();
        if project.is_empty() {
            msg_bail_anyhow!(Message::ProjectNameRequired);
        }
        let minutes = match (draft.start, draft.end) {
            (Some(start), Some(end)) => {
                let diff = minutes_between(start, end);
                if diff <= 0 {
                    msg_bail_anyhow!(Message::NonPositiveDuration);
                }
                diff
            }
            _ => match draft.minutes {
                Some(minutes) if minutes > 0 => minutes,
                Some(_) => msg_bail_anyhow!(Message::NonPositiveDuration),
                None => msg_bail_anyhow!(Message::MissingDuration),
            },
        };

        self.register_project(&project)?;
        let mut entry = Entry::new(draft.date, &project);
        entry.activity = draft.activity;
        entry.notes = draft.notes;
        entry.start = draft.start;
        entry.end = draft.end;
        entry.minutes = minutes;
        self.entries.push(entry.clone());
        self.persist_entries()?;
        Ok(entry)
    }

    /// Applies a partial patch to the entry with the given id.
    ///
    /// When the patch touches `start` or `end` and both end up present,
    /// `minutes` is recomputed as their difference; a patch that would leave
    /// a non-positive duration is rejected without touching state.
    pub fn update_entry(&mut self, id: &str, patch: EntryPatch) -> Result<Entry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| msg_error_anyhow!(Message::EntryNotFound(id.to_string())))?;
        if let Some(project) = &patch.project {
            if project.trim().is_empty() {
                msg_bail_anyhow!(Message::ProjectNameRequired);
            }
        }

        let mut patched = self.entries[index].clone();
        patch.apply(&mut patched);
        if patched.minutes <= 0 {
            msg_bail_anyhow!(Message::NonPositiveDuration);
        }

        if let Some(project) = &patch.project {
            self.register_project(project)?;
        }
        self.entries[index] = patched.clone();
        self.persist_entries()?;
        Ok(patched)
    }

    /// Removes the entry with the given id and returns it.
    pub fn delete_entry(&mut self, id: &str) -> Result<Entry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| msg_error_anyhow!(Message::EntryNotFound(id.to_string())))?;
        let removed = self.entries.remove(index);
        self.persist_entries()?;
        Ok(removed)
    }

    pub fn find_entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Resolves a full or prefixed entry id, as printed by the table views.
    pub fn resolve_entry_id(&self, prefix: &str) -> Result<String> {
        let mut matches = self.entries.iter().filter(|e| e.id.starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry.id.clone()),
            (Some(_), Some(_)) => msg_bail_anyhow!(Message::AmbiguousEntryId(prefix.to_string())),
            (None, _) => msg_bail_anyhow!(Message::EntryNotFound(prefix.to_string())),
        }
    }

    /// Adds a project name to the alphabetical project list. Returns whether
    /// the name was new. The list is append-only from the CLI.
    pub fn register_project(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            msg_bail_anyhow!(Message::ProjectNameRequired);
        }
        if self.projects.iter().any(|p| p == name) {
            return Ok(false);
        }
        self.projects.push(name.to_string());
        self.projects.sort();
        self.persist_projects()?;
        Ok(true)
    }

    /// Replaces the whole entry list with the cloud copy and folds its
    /// project names into the local list. Cloud overwrites local.
    pub fn replace_entries(&mut self, entries: Vec<Entry>) -> Result<()> {
        self.entries = entries;
        self.fold_in_projects();
        self.persist_entries()?;
        self.persist_projects()?;
        Ok(())
    }

    /// Appends imported entries, registering their project names. Returns
    /// the number appended.
    pub fn append_entries(&mut self, entries: Vec<Entry>) -> Result<usize> {
        let count = entries.len();
        self.entries.extend(entries);
        self.fold_in_projects();
        self.persist_entries()?;
        self.persist_projects()?;
        Ok(count)
    }

    /// Discards all local state, including a running timer.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.projects.clear();
        self.timer = None;
        self.storage.remove(StorageKey::Entries)?;
        self.storage.remove(StorageKey::Projects)?;
        self.storage.remove(StorageKey::Timer)?;
        Ok(())
    }

    fn fold_in_projects(&mut self) {
        for entry in &self.entries {
            let name = entry.project.trim();
            if !name.is_empty() && !self.projects.iter().any(|p| p == name) {
                self.projects.push(name.to_string());
            }
        }
        self.projects.sort();
    }

    fn persist_entries(&self) -> Result<()> {
        self.storage.save(StorageKey::Entries, &serde_json::to_string(&self.entries)?)
    }

    fn persist_projects(&self) -> Result<()> {
        self.storage.save(StorageKey::Projects, &serde_json::to_string(&self.projects)?)
    }
}

fn read_key<T: serde::de::DeserializeOwned>(storage: &dyn StoragePort, key: StorageKey) -> Option<T> {
    storage.load(key).and_then(|raw| serde_json::from_str(&raw).ok())
}
