//! Urgency tiers for event triage.
//!
//! A tier is a pure step function of days-until-event. Past events and
//! undated events never surface in the triage widget; they classify as
//! [`PriorityTier::None`].

use chrono::NaiveDate;
use serde::Serialize;

use crate::event::Event;

/// Discrete urgency bucket derived from days-until-event.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTier {
    /// 0-2 days out.
    Critical,
    /// 3-7 days out.
    High,
    /// 8-14 days out.
    Medium,
    /// 15-30 days out.
    Low,
    /// More than 30 days out, already past, or undated.
    None,
}

impl PriorityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityTier::Critical => "critical",
            PriorityTier::High => "high",
            PriorityTier::Medium => "medium",
            PriorityTier::Low => "low",
            PriorityTier::None => "none",
        }
    }
}

/// Classify a signed days-until value. `None` covers undated events.
pub fn classify(days_until: Option<i64>) -> PriorityTier {
    match days_until {
        Some(days) if (0..=2).contains(&days) => PriorityTier::Critical,
        Some(days) if (3..=7).contains(&days) => PriorityTier::High,
        Some(days) if (8..=14).contains(&days) => PriorityTier::Medium,
        Some(days) if (15..=30).contains(&days) => PriorityTier::Low,
        _ => PriorityTier::None,
    }
}

/// One event as it appears in the triage widget.
#[derive(Debug, Clone, Serialize)]
pub struct TriageEntry {
    pub id: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub days_until: i64,
    pub tier: PriorityTier,
}

/// Events of one urgency tier, soonest first.
#[derive(Debug, Clone, Serialize)]
pub struct TierBucket {
    pub tier: PriorityTier,
    pub count: usize,
    pub events: Vec<TriageEntry>,
}

/// Triage buckets for the four urgent tiers. Events classified as
/// [`PriorityTier::None`] are counted but not listed.
#[derive(Debug, Clone, Serialize)]
pub struct PrioritySummary {
    pub buckets: Vec<TierBucket>,
    pub unscheduled_or_past: usize,
}

/// Bucket `events` by urgency relative to `today`.
pub fn summarize(events: &[Event], today: NaiveDate) -> PrioritySummary {
    let mut entries: Vec<TriageEntry> = Vec::new();
    let mut none_count = 0usize;

    for event in events {
        let days_until = event.days_until(today);
        let tier = classify(days_until);
        match (tier, event.start_date, days_until) {
            (PriorityTier::None, _, _) => none_count += 1,
            (tier, Some(start_date), Some(days_until)) => entries.push(TriageEntry {
                id: event.id.clone(),
                title: event.title.clone(),
                start_date,
                days_until,
                tier,
            }),
            // Unreachable: a non-None tier implies a start date.
            _ => none_count += 1,
        }
    }

    entries.sort_by(|a, b| a.days_until.cmp(&b.days_until));

    let buckets = [
        PriorityTier::Critical,
        PriorityTier::High,
        PriorityTier::Medium,
        PriorityTier::Low,
    ]
    .into_iter()
    .map(|tier| {
        let events: Vec<TriageEntry> = entries
            .iter()
            .filter(|entry| entry.tier == tier)
            .cloned()
            .collect();
        TierBucket {
            tier,
            count: events.len(),
            events,
        }
    })
    .collect();

    PrioritySummary {
        buckets,
        unscheduled_or_past: none_count,
    }
}
