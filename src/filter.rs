//! Composable event filtering.
//!
//! A filter configuration is a conjunction: search text, status, date
//! range, and task readiness must all pass for an event to survive. There
//! is no scoring or ranking — an event is in or out. Filtering produces a
//! new, order-preserving subset and never mutates its input.

use chrono::NaiveDate;
use serde::Serialize;

use crate::date_range::DateRange;
use crate::event::{Event, EventStatus};
use crate::readiness::{has_incomplete_tasks, matches_any_of, CoreTask};

/// Status dimension of a filter: everything, or one exact status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Is(EventStatus),
}

impl StatusFilter {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim() == "all" {
            return Some(StatusFilter::All);
        }
        EventStatus::parse(raw).map(StatusFilter::Is)
    }

    fn matches(&self, event: &Event) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Is(status) => event.status == *status,
        }
    }
}

/// Task-readiness dimension: everything, or only events that still owe at
/// least one core task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Incomplete,
}

impl TaskFilter {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "all" => Some(TaskFilter::All),
            "incomplete" => Some(TaskFilter::Incomplete),
            _ => None,
        }
    }
}

/// Filter configuration for an event list view.
#[derive(Debug, Clone)]
pub struct EventFilters {
    /// Case-insensitive substring match over title, location, and account
    /// name. Empty matches everything.
    pub search_term: String,
    pub status: StatusFilter,
    pub date_range: DateRange,
    pub task_filter: TaskFilter,
    /// With [`TaskFilter::Incomplete`], additionally require the start
    /// date inside `[today, today + N]`. Undated events fail this window.
    pub task_window_days: Option<i64>,
    /// With [`TaskFilter::Incomplete`], require at least one of these
    /// tasks to be outstanding. Empty applies no selection.
    pub selected_task_ids: Vec<String>,
}

impl Default for EventFilters {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status: StatusFilter::All,
            date_range: DateRange::All,
            task_filter: TaskFilter::All,
            task_window_days: None,
            selected_task_ids: Vec::new(),
        }
    }
}

impl EventFilters {
    /// Whether `event` passes every stage of this filter.
    ///
    /// Stages short-circuit in order: search, status, date range, task
    /// readiness. An undated event is only ever rejected by the date
    /// stages, never by search, status, or task existence.
    pub fn matches(&self, event: &Event, tasks: &[CoreTask], today: NaiveDate) -> bool {
        if !self.matches_search(event) {
            return false;
        }
        if !self.status.matches(event) {
            return false;
        }
        if !self.date_range.contains(event.start_date, today) {
            return false;
        }
        if self.task_filter == TaskFilter::Incomplete {
            if !has_incomplete_tasks(event, tasks) {
                return false;
            }
            if let Some(days) = self.task_window_days {
                if !DateRange::CustomDays(days).contains(event.start_date, today) {
                    return false;
                }
            }
            if !matches_any_of(event, tasks, &self.selected_task_ids) {
                return false;
            }
        }
        true
    }

    fn matches_search(&self, event: &Event) -> bool {
        let term = self.search_term.trim();
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        let mut haystacks = vec![event.title.as_str()];
        if let Some(location) = event.display_location() {
            haystacks.push(location);
        }
        if let Some(account) = event.account_name.as_deref() {
            haystacks.push(account);
        }
        haystacks
            .iter()
            .any(|text| text.to_lowercase().contains(&needle))
    }
}

/// Counts for the list header: how many events exist, how many survived.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FilterCounts {
    pub total: usize,
    pub filtered: usize,
}

/// Apply `filters` to `events`, producing a new order-preserving subset.
pub fn filter_events(
    events: &[Event],
    filters: &EventFilters,
    tasks: &[CoreTask],
    today: NaiveDate,
) -> Vec<Event> {
    let filtered: Vec<Event> = events
        .iter()
        .filter(|event| filters.matches(event, tasks, today))
        .cloned()
        .collect();
    tracing::debug!(
        total = events.len(),
        filtered = filtered.len(),
        "filtered events"
    );
    filtered
}

/// Count summary for `events` under `filters`.
pub fn count_events(
    events: &[Event],
    filters: &EventFilters,
    tasks: &[CoreTask],
    today: NaiveDate,
) -> FilterCounts {
    let filtered = events
        .iter()
        .filter(|event| filters.matches(event, tasks, today))
        .count();
    FilterCounts {
        total: events.len(),
        filtered,
    }
}
