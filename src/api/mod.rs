//! Remote sync layer.
//!
//! Mirrors the local ledger to a hosted backend when a user is signed in.
//! The contract is deliberately small: session lifecycle, row CRUD, and a
//! bulk insert for imports. Everything here is best-effort from the core's
//! perspective; a failed remote call is logged and the already-applied local
//! mutation stands (last write wins, cloud overwrites local on login).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tidbok::api::{CloudClient, SyncPort};
//! use tidbok::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! if let Some(remote) = &config.remote {
//!     let client = CloudClient::new(remote);
//!     let rows = client.fetch_all(true).await?;
//! }
//! # Ok(())
//! # }
//! ```

use crate::libs::entry::Entry;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_warning};
use thiserror::Error;

pub mod cloud;
pub mod rows;

pub use cloud::CloudClient;
pub use rows::EntryRow;

/// Failure taxonomy for remote operations. None of these block or roll back
/// a local mutation.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("not signed in")]
    NotSignedIn,
    #[error("session expired, sign in again")]
    SessionExpired,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend rejected the request with status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed backend payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("session cache unreadable: {0}")]
    SessionCache(String),
}

/// Abstract contract with the row-storage backend.
///
/// `CloudClient` is the production implementation; tests substitute an
/// in-memory fake.
#[allow(async_fn_in_trait)]
pub trait SyncPort {
    /// Fetches rows, scoped to the signed-in account when `only_mine` is
    /// set. Admin accounts pass `false` to see every employee's rows.
    async fn fetch_all(&self, only_mine: bool) -> Result<Vec<EntryRow>, SyncError>;
    async fn insert(&self, row: &EntryRow) -> Result<(), SyncError>;
    /// Applies a partial row patch to the row with the given id.
    async fn update(&self, id: &str, patch: &serde_json::Value) -> Result<(), SyncError>;
    async fn delete(&self, id: &str) -> Result<(), SyncError>;
    /// Bulk insert used by the import path.
    async fn insert_many(&self, rows: &[EntryRow]) -> Result<usize, SyncError>;
}

/// Best-effort mirroring of local mutations.
///
/// Each helper swallows the error after logging it: the local change has
/// already been applied and persisted, and the cloud copy catches up on the
/// next pull.
pub mod mirror {
    use super::*;
    use crate::libs::entry::EntryPatch;

    pub async fn inserted(sync: &impl SyncPort, entry: &Entry) {
        if let Err(err) = sync.insert(&rows::entry_to_row(entry)).await {
            report("insert", err);
        }
    }

    pub async fn updated(sync: &impl SyncPort, id: &str, patch: &EntryPatch) {
        if let Err(err) = sync.update(id, &rows::patch_to_json(patch)).await {
            report("update", err);
        }
    }

    pub async fn deleted(sync: &impl SyncPort, id: &str) {
        if let Err(err) = sync.delete(id).await {
            report("delete", err);
        }
    }

    /// Returns the number of rows the backend accepted, `None` on failure.
    pub async fn imported(sync: &impl SyncPort, entries: &[Entry]) -> Option<usize> {
        let rows: Vec<EntryRow> = entries.iter().map(rows::entry_to_row).collect();
        match sync.insert_many(&rows).await {
            Ok(count) => Some(count),
            Err(err) => {
                report("bulk insert", err);
                None
            }
        }
    }

    fn report(operation: &str, err: SyncError) {
        msg_debug!(format!("remote {} failed: {:?}", operation, err));
        msg_warning!(Message::RemoteMirrorFailed(err.to_string()));
    }
}
