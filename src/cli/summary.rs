//! evops summary command implementation
//!
//! Buckets events into urgency tiers by days-until-event for triage.

use crate::cli::CliContext;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::priority::summarize;

/// Options for the summary command
pub struct SummaryOptions {
    pub json: bool,
    pub quiet: bool,
    pub ctx: CliContext,
}

pub fn run(options: SummaryOptions) -> Result<()> {
    let ctx = &options.ctx;
    let summary = summarize(&ctx.events, ctx.today);

    let surfaced: usize = summary.buckets.iter().map(|bucket| bucket.count).sum();
    let mut human = HumanOutput::new(format!(
        "Priority summary ({} event(s) in the next 30 days)",
        surfaced
    ));
    for bucket in &summary.buckets {
        human.push_summary(bucket.tier.as_str(), bucket.count.to_string());
    }
    for bucket in &summary.buckets {
        for entry in &bucket.events {
            human.push_detail(format!(
                "[{}] {}  {}  in {} day(s)",
                entry.tier.as_str(),
                entry.id,
                entry.title,
                entry.days_until
            ));
        }
    }
    if summary.unscheduled_or_past > 0 {
        human.push_warning(format!(
            "{} event(s) past, unscheduled, or beyond 30 days",
            summary.unscheduled_or_past
        ));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "summary",
        &summary,
        Some(&human),
    )
}
