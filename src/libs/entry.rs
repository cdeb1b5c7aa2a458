//! The ledger entry model and its edit semantics.
//!
//! An [`Entry`] is one logged work interval: a date, a project/order pair and
//! a duration in minutes, optionally carrying the clock times it was derived
//! from. Edits go through [`EntryPatch`], which enforces the single derived
//! invariant of the model: whenever a patch touches `start` or `end` and the
//! patched entry has both, `minutes` is recomputed as their difference.
//! Editing `minutes` directly never back-propagates to the clock times.

use crate::libs::clock::{minutes_between, TIME_FORMAT};
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Client-side identifier, immutable after creation.
    pub id: String,
    /// The day the work is attributed to.
    pub date: NaiveDate,
    /// Work site or client label, never blank.
    pub project: String,
    /// Order or ticket number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Present only when the entry came from a timer or an explicit
    /// start/end submission.
    #[serde(default, with = "hm_option", skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveTime>,
    #[serde(default, with = "hm_option", skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveTime>,
    pub minutes: i64,
    /// Creation timestamp, used for local ordering only.
    pub created_at: DateTime<Local>,
    /// Owning account, populated by the cloud layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Entry {
    pub fn new(date: NaiveDate, project: &str) -> Self {
        Entry {
            id: Uuid::new_v4().to_string(),
            date,
            project: project.trim().to_string(),
            activity: None,
            notes: None,
            start: None,
            end: None,
            minutes: 0,
            created_at: Local::now(),
            user_id: None,
        }
    }
}

/// Partial field update for an existing entry.
///
/// Outer `None` leaves a field untouched; for the optional entry fields the
/// inner option distinguishes setting a value from clearing it.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub date: Option<NaiveDate>,
    pub project: Option<String>,
    pub activity: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub start: Option<Option<NaiveTime>>,
    pub end: Option<Option<NaiveTime>>,
    pub minutes: Option<i64>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.project.is_none()
            && self.activity.is_none()
            && self.notes.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.minutes.is_none()
    }

    /// Whether the patch touches either clock-time field.
    pub fn touches_times(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Applies the patch in place and recomputes `minutes` when a touched
    /// clock time leaves both `start` and `end` present.
    pub fn apply(&self, entry: &mut Entry) {
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(project) = &self.project {
            entry.project = project.trim().to_string();
        }
        if let Some(activity) = &self.activity {
            entry.activity = activity.clone();
        }
        if let Some(notes) = &self.notes {
            entry.notes = notes.clone();
        }
        if let Some(start) = self.start {
            entry.start = start;
        }
        if let Some(end) = self.end {
            entry.end = end;
        }
        if let Some(minutes) = self.minutes {
            entry.minutes = minutes;
        }

        if self.touches_times() {
            if let (Some(start), Some(end)) = (entry.start, entry.end) {
                entry.minutes = minutes_between(start, end);
            }
        }
    }
}

/// Serde adapter storing optional clock times as `HH:MM` strings.
mod hm_option {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.serialize_some(&time.format(TIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(raw) => NaiveTime::parse_from_str(&raw, TIME_FORMAT)
                .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
