use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use evops::event::{Event, EventDate, EventSnapshot, EventStatus, TaskCompletion};
use tempfile::TempDir;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn fixed_created_at() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-01-01T12:00:00Z")
        .expect("rfc3339")
        .with_timezone(&Utc)
}

pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            event: Event {
                id: id.to_string(),
                title: title.to_string(),
                status: EventStatus::Scheduled,
                start_date: None,
                account_name: None,
                location: None,
                event_dates: Vec::new(),
                task_completions: Vec::new(),
                created_at: fixed_created_at(),
            },
        }
    }

    pub fn status(mut self, status: EventStatus) -> Self {
        self.event.status = status;
        self
    }

    pub fn starts(mut self, date: NaiveDate) -> Self {
        self.event.start_date = Some(date);
        self
    }

    pub fn account(mut self, name: &str) -> Self {
        self.event.account_name = Some(name.to_string());
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.event.location = Some(location.to_string());
        self
    }

    pub fn occurrence(mut self, date: NaiveDate, location: Option<&str>) -> Self {
        self.event.event_dates.push(EventDate {
            date,
            location: location.map(str::to_string),
        });
        self
    }

    pub fn created_at(mut self, raw: &str) -> Self {
        self.event.created_at = DateTime::parse_from_rfc3339(raw)
            .expect("rfc3339")
            .with_timezone(&Utc);
        self
    }

    pub fn task_done(mut self, task_id: &str) -> Self {
        self.event.task_completions.push(TaskCompletion {
            task_id: task_id.to_string(),
            completed: true,
            completed_at: Some(fixed_created_at()),
            completed_by: Some("ops".to_string()),
        });
        self
    }

    pub fn task_open(mut self, task_id: &str) -> Self {
        self.event.task_completions.push(TaskCompletion {
            task_id: task_id.to_string(),
            completed: false,
            completed_at: None,
            completed_by: None,
        });
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}

pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join(".evops.toml");
        fs::write(&path, contents).expect("write config");
        path
    }

    pub fn write_snapshot(&self, events: Vec<Event>) -> PathBuf {
        let snapshot = EventSnapshot {
            schema_version: evops::event::SNAPSHOT_SCHEMA_VERSION.to_string(),
            generated_at: fixed_created_at(),
            events,
        };
        let path = self.dir.path().join("events.json");
        let raw = serde_json::to_string_pretty(&snapshot).expect("serialize snapshot");
        fs::write(&path, raw).expect("write snapshot");
        path
    }
}
