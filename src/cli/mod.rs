//! Command-line interface for evops
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::event::{Event, EventSnapshot};

mod list;
mod summary;
mod tasks;

/// evops - event operations
///
/// A CLI over exported event snapshots: readiness against tenant core
/// tasks, composable list filtering and sorting, and priority triage.
#[derive(Parser, Debug)]
#[command(name = "evops")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the .evops.toml config (defaults to ./.evops.toml)
    #[arg(long, global = true, env = "EVOPS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the event snapshot (overrides the config)
    #[arg(long, global = true, env = "EVOPS_EVENTS")]
    pub events: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD) instead of the local calendar date
    #[arg(long, global = true, env = "EVOPS_NOW")]
    pub now: Option<String>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter and sort the event list
    List {
        /// Case-insensitive search over title, location, and account name
        #[arg(long, default_value = "")]
        search: String,

        /// Status: all, scheduled, confirmed, in_progress, completed,
        /// cancelled, postponed
        #[arg(long, default_value = "all")]
        status: String,

        /// Date range: all, today, this_week, this_month, upcoming, past
        #[arg(long)]
        range: Option<String>,

        /// Restrict to events starting within N days (overrides --range)
        #[arg(long, value_name = "DAYS")]
        within_days: Option<u32>,

        /// Task filter: all, incomplete
        #[arg(long, default_value = "all")]
        tasks: String,

        /// With --tasks incomplete, also require the start date within
        /// N days
        #[arg(long, value_name = "DAYS")]
        task_window: Option<u32>,

        /// With --tasks incomplete, require one of these core tasks to be
        /// outstanding (repeatable)
        #[arg(long = "task", value_name = "ID")]
        selected_tasks: Vec<String>,

        /// Sort key: date_asc, date_desc, title_asc, title_desc,
        /// account_asc, account_desc (unknown keys fall back to date_asc)
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show outstanding core tasks per event
    Tasks {
        /// Limit to a single event id
        #[arg(long)]
        event: Option<String>,
    },

    /// Priority triage buckets by days until event
    Summary,
}

/// Resolved input shared by all subcommands.
pub struct CliContext {
    pub config: Config,
    pub events: Vec<Event>,
    pub today: NaiveDate,
}

impl CliContext {
    pub fn resolve(
        config_path: Option<&Path>,
        events_path: Option<&Path>,
        now: Option<&str>,
    ) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load(path)?,
            None => Config::load_from_dir(Path::new(".")),
        };

        let snapshot_path = match events_path {
            Some(path) => path.to_path_buf(),
            None => match config_path.and_then(Path::parent) {
                Some(dir) if config.snapshot.is_relative() => dir.join(&config.snapshot),
                _ => config.snapshot.clone(),
            },
        };
        let snapshot = EventSnapshot::load(&snapshot_path)?;

        let today = match now {
            Some(raw) => parse_reference_date(raw)?,
            None => Local::now().date_naive(),
        };

        Ok(Self {
            config,
            events: snapshot.events,
            today,
        })
    }
}

/// Parse `--now`. Accepts a bare date or an RFC 3339 timestamp, keeping
/// only the calendar date.
fn parse_reference_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }
    Err(Error::InvalidArgument(format!(
        "invalid --now '{trimmed}': expected YYYY-MM-DD"
    )))
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let ctx = CliContext::resolve(
            self.config.as_deref(),
            self.events.as_deref(),
            self.now.as_deref(),
        )?;

        match self.command {
            Commands::List {
                search,
                status,
                range,
                within_days,
                tasks,
                task_window,
                selected_tasks,
                sort,
            } => list::run(list::ListOptions {
                search,
                status,
                range,
                within_days,
                tasks,
                task_window,
                selected_tasks,
                sort,
                json: self.json,
                quiet: self.quiet,
                ctx,
            }),
            Commands::Tasks { event } => tasks::run(tasks::TasksOptions {
                event,
                json: self.json,
                quiet: self.quiet,
                ctx,
            }),
            Commands::Summary => summary::run(summary::SummaryOptions {
                json: self.json,
                quiet: self.quiet,
                ctx,
            }),
        }
    }
}
