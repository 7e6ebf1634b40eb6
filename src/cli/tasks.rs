//! evops tasks command implementation
//!
//! Reports outstanding core tasks per event, against the tenant's active
//! templates.

use crate::cli::CliContext;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::readiness::{incomplete_tasks, CoreTask};

/// Options for the tasks command
pub struct TasksOptions {
    pub event: Option<String>,
    pub json: bool,
    pub quiet: bool,
    pub ctx: CliContext,
}

#[derive(serde::Serialize)]
struct TasksReport {
    core_tasks: usize,
    events: Vec<EventReadiness>,
}

#[derive(serde::Serialize)]
struct EventReadiness {
    id: String,
    title: String,
    ready: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    incomplete: Vec<OpenTask>,
}

#[derive(serde::Serialize)]
struct OpenTask {
    id: String,
    name: String,
}

pub fn run(options: TasksOptions) -> Result<()> {
    let ctx = &options.ctx;
    let tasks = ctx.config.tasks.active();

    let selected: Vec<&crate::event::Event> = match &options.event {
        Some(id) => {
            let event = ctx
                .events
                .iter()
                .find(|event| &event.id == id)
                .ok_or_else(|| Error::EventNotFound(id.clone()))?;
            vec![event]
        }
        None => ctx.events.iter().collect(),
    };

    let events: Vec<EventReadiness> = selected
        .iter()
        .map(|event| readiness(event, &tasks))
        .collect();

    let report = TasksReport {
        core_tasks: tasks.len(),
        events,
    };

    let open_count: usize = report
        .events
        .iter()
        .map(|event| event.incomplete.len())
        .sum();
    let mut human = HumanOutput::new(format!(
        "Task readiness ({} event(s), {} open task(s))",
        report.events.len(),
        open_count
    ));
    human.push_summary("core tasks", report.core_tasks.to_string());
    for event in &report.events {
        human.push_detail(describe(event));
    }
    if tasks.is_empty() {
        human.push_warning("no active core tasks configured; every event reports ready");
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "tasks",
        &report,
        Some(&human),
    )
}

fn readiness(event: &crate::event::Event, tasks: &[CoreTask]) -> EventReadiness {
    let incomplete: Vec<OpenTask> = incomplete_tasks(event, tasks)
        .into_iter()
        .map(|task| OpenTask {
            id: task.id.clone(),
            name: task.name.clone(),
        })
        .collect();
    EventReadiness {
        id: event.id.clone(),
        title: event.title.clone(),
        ready: incomplete.is_empty(),
        incomplete,
    }
}

fn describe(event: &EventReadiness) -> String {
    if event.ready {
        format!("{}  {}  ready", event.id, event.title)
    } else {
        let names: Vec<&str> = event
            .incomplete
            .iter()
            .map(|task| task.name.as_str())
            .collect();
        format!("{}  {}  missing: {}", event.id, event.title, names.join(", "))
    }
}
