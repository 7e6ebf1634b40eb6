//! Core-task readiness for events.
//!
//! Tenants define a list of core tasks that should be carried out for every
//! event ("Confirm venue", "Send contract", ...). An event's completion
//! records say which of those have been done. Everything here is a pure
//! function over those two inputs; there are no error conditions — missing
//! or empty collections mean "nothing completed", never a failure.

use serde::{Deserialize, Serialize};

use crate::event::Event;

fn default_active() -> bool {
    true
}

/// A tenant-defined unit of operational work expected for every event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreTask {
    pub id: String,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl CoreTask {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            active: true,
        }
    }
}

/// True when the event carries a completion record for `task_id` with
/// `completed = true`. A record with `completed = false`, or no record at
/// all, both mean the task is still outstanding.
fn is_completed(event: &Event, task_id: &str) -> bool {
    event
        .task_completions
        .iter()
        .any(|record| record.task_id == task_id && record.completed)
}

/// Core tasks still outstanding for an event, in template order.
///
/// An empty template list yields an empty result; an event with no
/// completion records owes every template.
pub fn incomplete_tasks<'a>(event: &Event, tasks: &'a [CoreTask]) -> Vec<&'a CoreTask> {
    tasks
        .iter()
        .filter(|task| !is_completed(event, &task.id))
        .collect()
}

/// Ids of the outstanding core tasks, in template order.
pub fn incomplete_task_ids(event: &Event, tasks: &[CoreTask]) -> Vec<String> {
    incomplete_tasks(event, tasks)
        .into_iter()
        .map(|task| task.id.clone())
        .collect()
}

pub fn has_incomplete_tasks(event: &Event, tasks: &[CoreTask]) -> bool {
    tasks.iter().any(|task| !is_completed(event, &task.id))
}

/// True when no task selection is applied, or when at least one of the
/// selected tasks is still outstanding for this event. Lets a user filter
/// to "events still missing task X or Y".
pub fn matches_any_of(event: &Event, tasks: &[CoreTask], selected_ids: &[String]) -> bool {
    if selected_ids.is_empty() {
        return true;
    }
    tasks
        .iter()
        .filter(|task| selected_ids.iter().any(|id| id == &task.id))
        .any(|task| !is_completed(event, &task.id))
}
