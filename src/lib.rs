//! evops - Event Operations Library
//!
//! This library provides the core functionality for the evops CLI tool:
//! a pure derivation layer over exported event snapshots.
//!
//! # Core Concepts
//!
//! - **Events**: read-only records from the upstream system of record
//! - **Core tasks**: tenant-defined work expected for every event
//! - **Readiness**: which core tasks are still outstanding per event
//! - **Filtering**: composable search/status/date/task predicates
//! - **Priority tiers**: urgency buckets by days-until-event
//!
//! Every derivation is a pure function of its inputs. The reference clock
//! is always passed in, never read inside the core, so identical inputs
//! give identical outputs and tests are deterministic.
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Tenant configuration from `.evops.toml`
//! - `error`: Error types and result aliases
//! - `event`: Event records and snapshot loading
//! - `readiness`: Core-task completion resolution
//! - `date_range`: Named date ranges over start dates
//! - `filter`: Composable event filtering
//! - `sort`: Stable orderings for list views
//! - `priority`: Urgency tiers and triage summaries

pub mod cli;
pub mod config;
pub mod date_range;
pub mod error;
pub mod event;
pub mod filter;
pub mod output;
pub mod priority;
pub mod readiness;
pub mod sort;

pub use error::{Error, Result};
