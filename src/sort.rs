//! Total orderings for event list views.
//!
//! Sorting always produces a new vector; the input list is reusable across
//! calls. `slice::sort_by` is stable, so equal keys keep their relative
//! input order — callers and tests may rely on that.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveTime, Utc};

use crate::event::Event;

/// Sort key for an event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    DateAsc,
    DateDesc,
    TitleAsc,
    TitleDesc,
    AccountAsc,
    AccountDesc,
}

impl SortKey {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "date_asc" => Some(SortKey::DateAsc),
            "date_desc" => Some(SortKey::DateDesc),
            "title_asc" => Some(SortKey::TitleAsc),
            "title_desc" => Some(SortKey::TitleDesc),
            "account_asc" => Some(SortKey::AccountAsc),
            "account_desc" => Some(SortKey::AccountDesc),
            _ => None,
        }
    }

    /// Unknown keys fall back to `date_asc`.
    pub fn from_key(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(SortKey::DateAsc)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateAsc => "date_asc",
            SortKey::DateDesc => "date_desc",
            SortKey::TitleAsc => "title_asc",
            SortKey::TitleDesc => "title_desc",
            SortKey::AccountAsc => "account_asc",
            SortKey::AccountDesc => "account_desc",
        }
    }
}

/// Timestamp used for date ordering: the start date at midnight, or the
/// creation timestamp when the event is undated.
fn date_key(event: &Event) -> DateTime<Utc> {
    match event.start_date {
        Some(date) => date.and_time(NaiveTime::MIN).and_utc(),
        None => event.created_at,
    }
}

fn title_key(event: &Event) -> String {
    event.title.to_lowercase()
}

/// Missing account names sort as the empty string, never as a separate
/// null bucket.
fn account_key(event: &Event) -> String {
    event
        .account_name
        .as_deref()
        .unwrap_or("")
        .to_lowercase()
}

/// Compare two events under `key`.
pub fn compare(a: &Event, b: &Event, key: SortKey) -> Ordering {
    match key {
        SortKey::DateAsc => date_key(a).cmp(&date_key(b)),
        SortKey::DateDesc => date_key(b).cmp(&date_key(a)),
        SortKey::TitleAsc => title_key(a).cmp(&title_key(b)),
        SortKey::TitleDesc => title_key(b).cmp(&title_key(a)),
        SortKey::AccountAsc => account_key(a).cmp(&account_key(b)),
        SortKey::AccountDesc => account_key(b).cmp(&account_key(a)),
    }
}

/// Sort `events` under `key` into a new vector.
pub fn sort_events(events: &[Event], key: SortKey) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key));
    sorted
}
