//! evops list command implementation
//!
//! Applies the composable filter and sort to the event snapshot and
//! prints the surviving rows with a count summary.

use chrono::NaiveDate;

use crate::cli::CliContext;
use crate::date_range::DateRange;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::filter::{filter_events, EventFilters, FilterCounts, StatusFilter, TaskFilter};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::readiness::{incomplete_task_ids, CoreTask};
use crate::sort::{sort_events, SortKey};

/// Options for the list command
pub struct ListOptions {
    pub search: String,
    pub status: String,
    pub range: Option<String>,
    pub within_days: Option<u32>,
    pub tasks: String,
    pub task_window: Option<u32>,
    pub selected_tasks: Vec<String>,
    pub sort: Option<String>,
    pub json: bool,
    pub quiet: bool,
    pub ctx: CliContext,
}

#[derive(serde::Serialize)]
struct ListReport {
    counts: FilterCounts,
    range: &'static str,
    sort: &'static str,
    events: Vec<ListedEvent>,
}

#[derive(serde::Serialize)]
struct ListedEvent {
    id: String,
    title: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    days_until: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    incomplete_tasks: Vec<String>,
}

pub fn run(options: ListOptions) -> Result<()> {
    let ctx = &options.ctx;
    let tasks = ctx.config.tasks.active();
    let filters = build_filters(&options, &ctx.config.defaults.date_range())?;

    let sort_key = match &options.sort {
        Some(raw) => SortKey::from_key(raw),
        None => ctx.config.defaults.sort_key(),
    };

    let filtered = filter_events(&ctx.events, &filters, &tasks, ctx.today);
    let counts = FilterCounts {
        total: ctx.events.len(),
        filtered: filtered.len(),
    };
    let sorted = sort_events(&filtered, sort_key);

    let events: Vec<ListedEvent> = sorted
        .iter()
        .map(|event| listed(event, &tasks, ctx.today))
        .collect();

    let report = ListReport {
        counts,
        range: filters.date_range.as_str(),
        sort: sort_key.as_str(),
        events,
    };

    let mut human = HumanOutput::new(format!(
        "Events ({} of {})",
        counts.filtered, counts.total
    ));
    human.push_summary("range", report.range);
    human.push_summary("sort", report.sort);
    for event in &report.events {
        human.push_detail(describe(event));
    }
    let undated = sorted.iter().filter(|e| e.start_date.is_none()).count();
    if undated > 0 {
        human.push_warning(format!("{undated} event(s) have no start date"));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "list",
        &report,
        Some(&human),
    )
}

fn build_filters(options: &ListOptions, default_range: &DateRange) -> Result<EventFilters> {
    let status = StatusFilter::parse(&options.status).ok_or_else(|| {
        Error::InvalidArgument(format!("unknown status '{}'", options.status))
    })?;

    let date_range = match (options.within_days, &options.range) {
        (Some(days), _) => DateRange::CustomDays(i64::from(days)),
        (None, Some(raw)) => DateRange::parse(raw)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown date range '{raw}'")))?,
        (None, None) => *default_range,
    };

    let task_filter = TaskFilter::parse(&options.tasks).ok_or_else(|| {
        Error::InvalidArgument(format!("unknown task filter '{}'", options.tasks))
    })?;

    Ok(EventFilters {
        search_term: options.search.clone(),
        status,
        date_range,
        task_filter,
        task_window_days: options.task_window.map(i64::from),
        selected_task_ids: options.selected_tasks.clone(),
    })
}

fn listed(event: &Event, tasks: &[CoreTask], today: NaiveDate) -> ListedEvent {
    ListedEvent {
        id: event.id.clone(),
        title: event.title.clone(),
        status: event.status.as_str(),
        start_date: event.start_date,
        account_name: event.account_name.clone(),
        location: event.display_location().map(str::to_string),
        days_until: event.days_until(today),
        incomplete_tasks: incomplete_task_ids(event, tasks),
    }
}

fn describe(event: &ListedEvent) -> String {
    let date = event
        .start_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "unscheduled".to_string());
    let mut line = format!("{}  {}  [{}] {}", event.id, date, event.status, event.title);
    if !event.incomplete_tasks.is_empty() {
        line.push_str(&format!("  ({} task(s) open)", event.incomplete_tasks.len()));
    }
    line
}
