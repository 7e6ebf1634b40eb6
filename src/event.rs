//! Event records and the snapshot document they arrive in.
//!
//! Events are read-only input to the derivation core: filtering, sorting,
//! and readiness computations never mutate them. Snapshots are plain JSON
//! documents exported by the upstream system of record.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const SNAPSHOT_SCHEMA_VERSION: &str = "evops.events.v1";

/// Lifecycle status of an event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    Postponed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Scheduled => "scheduled",
            EventStatus::Confirmed => "confirmed",
            EventStatus::InProgress => "in_progress",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
            EventStatus::Postponed => "postponed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "scheduled" => Some(EventStatus::Scheduled),
            "confirmed" => Some(EventStatus::Confirmed),
            "in_progress" => Some(EventStatus::InProgress),
            "completed" => Some(EventStatus::Completed),
            "cancelled" => Some(EventStatus::Cancelled),
            "postponed" => Some(EventStatus::Postponed),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A secondary occurrence date for an event.
///
/// The upstream system orders these; the first entry is the primary
/// displayed date and location. This crate never reorders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDate {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Completion record linking an event to a core task.
///
/// Absence of a record for a (event, task) pair means the task has never
/// been addressed, which counts as incomplete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCompletion {
    pub task_id: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,
}

/// An event as exported by the upstream system.
///
/// `start_date` is a bare calendar date. It deserializes into a
/// [`NaiveDate`] and is compared against a local calendar "today", never
/// against a UTC instant, so midnight boundary shifts cannot move an event
/// across days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub status: EventStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event_dates: Vec<EventDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub task_completions: Vec<TaskCompletion>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// The primary occurrence, when secondary dates are present.
    pub fn primary_occurrence(&self) -> Option<&EventDate> {
        self.event_dates.first()
    }

    /// Displayed location: the event's own, falling back to the primary
    /// occurrence's.
    pub fn display_location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .or_else(|| self.primary_occurrence().and_then(|d| d.location.as_deref()))
    }

    /// Signed day count from `today` to the event's start date.
    /// `None` when the event has no start date.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.start_date
            .map(|date| (date - today).num_days())
    }
}

/// Snapshot document wrapping an exported event list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSnapshot {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl EventSnapshot {
    /// Read a snapshot from disk. A missing file is a user error; malformed
    /// JSON is an operation failure.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::SnapshotNotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        let snapshot: EventSnapshot = serde_json::from_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            events = snapshot.events.len(),
            "loaded event snapshot"
        );
        Ok(snapshot)
    }
}
