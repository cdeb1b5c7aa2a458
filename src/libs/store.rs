//! Key-value persistence behind the tracker.
//!
//! The ledger is small enough to live as three JSON documents: the entry
//! list, the project list, and the running-timer snapshot (absent while no
//! timer runs). [`StoragePort`] is the injected seam between the tracker and
//! whatever holds those documents; [`JsonStore`] keeps them as files in the
//! application data directory and [`MemoryStore`] is the in-memory fake used
//! by tests.
//!
//! A missing or unreadable payload is reported as absent, never as an error:
//! malformed local data degrades to an empty ledger instead of blocking the
//! application.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Entries,
    Projects,
    Timer,
}

impl StorageKey {
    pub fn file_name(&self) -> &'static str {
        match self {
            StorageKey::Entries => "entries.json",
            StorageKey::Projects => "projects.json",
            StorageKey::Timer => "timer.json",
        }
    }
}

pub trait StoragePort {
    /// Raw payload for a key, or `None` when absent or unreadable.
    fn load(&self, key: StorageKey) -> Option<String>;
    fn save(&self, key: StorageKey, payload: &str) -> Result<()>;
    fn remove(&self, key: StorageKey) -> Result<()>;
}

/// File-backed store: one JSON file per key under the platform data directory.
pub struct JsonStore {
    storage: DataStorage,
}

impl JsonStore {
    pub fn new() -> Self {
        JsonStore { storage: DataStorage::new() }
    }
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoragePort for JsonStore {
    fn load(&self, key: StorageKey) -> Option<String> {
        let path = self.storage.get_path(key.file_name()).ok()?;
        fs::read_to_string(path).ok()
    }

    fn save(&self, key: StorageKey, payload: &str) -> Result<()> {
        let path = self.storage.get_path(key.file_name())?;
        fs::write(path, payload)?;
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<()> {
        let path = self.storage.get_path(key.file_name())?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    cells: Mutex<HashMap<StorageKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStore {
    fn load(&self, key: StorageKey) -> Option<String> {
        self.cells.lock().ok()?.get(&key).cloned()
    }

    fn save(&self, key: StorageKey, payload: &str) -> Result<()> {
        if let Ok(mut cells) = self.cells.lock() {
            cells.insert(key, payload.to_string());
        }
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<()> {
        if let Ok(mut cells) = self.cells.lock() {
            cells.remove(&key);
        }
        Ok(())
    }
}
