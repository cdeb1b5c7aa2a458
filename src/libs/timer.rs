//! The single running-timer slot.
//!
//! At most one timer exists per workstation. It is created by `start`,
//! persisted under its own storage key while live, and consumed into a
//! completed [`Entry`] by `stop`. Its presence is what drives the
//! `status --follow` refresh loop.

use crate::libs::entry::Entry;
use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningTimer {
    pub id: String,
    pub project: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub start_ts: NaiveDateTime,
}

impl RunningTimer {
    pub fn begin(project: &str, activity: Option<String>, notes: Option<String>, now: NaiveDateTime) -> Self {
        RunningTimer {
            id: Uuid::new_v4().to_string(),
            project: project.trim().to_string(),
            activity,
            notes,
            start_ts: now,
        }
    }

    /// Whole elapsed minutes from the start timestamp to `now`, floored,
    /// never less than 1 so that stopping right after starting still logs
    /// a billable interval.
    pub fn elapsed_minutes(&self, now: NaiveDateTime) -> i64 {
        (now - self.start_ts).num_minutes().max(1)
    }

    /// Converts the timer into a completed entry dated on the stop day.
    ///
    /// Clock times are truncated to the minute; the duration comes from the
    /// elapsed wall clock, not from the truncated times.
    pub fn into_entry(self, now: NaiveDateTime) -> Entry {
        let minutes = self.elapsed_minutes(now);
        let mut entry = Entry::new(now.date(), &self.project);
        entry.id = self.id;
        entry.activity = self.activity;
        entry.notes = self.notes;
        entry.start = Some(truncate_to_minute(self.start_ts.time()));
        entry.end = Some(truncate_to_minute(now.time()));
        entry.minutes = minutes;
        entry
    }
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}
